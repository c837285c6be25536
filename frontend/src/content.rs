//! Static copy rendered by the page sections.

use crate::types::{FaqEntry, Section, ServiceOffer, Testimonial};

/// Links in the header, mobile menu order.
pub const NAV_SECTIONS: [Section; 5] = [
    Section::Services,
    Section::About,
    Section::Faq,
    Section::Contact,
    Section::Book,
];

/// Links in the footer "Quick links" column.
pub const FOOTER_SECTIONS: [(Section, &str); 3] = [
    (Section::Services, "Services"),
    (Section::About, "About"),
    (Section::Book, "Book"),
];

pub const HERO_HEADLINE: &str = "Personalised nutrition care for a healthier you";
pub const SLOGAN: &str = "Food is our first medicine - choose it wisely";
pub const HERO_BLURB: &str = "Clinical diet plans, weight management, diabetes-friendly meals and long-term lifestyle coaching — evidence-based and empathetic care.";

pub const SERVICES: &[ServiceOffer] = &[
    ServiceOffer {
        title: "Weight Management",
        summary: "Sustainable plans & ongoing coaching",
        detail: "Personalised calorie plans, meal timing & habit coaching.",
    },
    ServiceOffer {
        title: "Diabetes Care",
        summary: "Meal plans & carb counting",
        detail: "Carb-smart menus, glucose-friendly swaps and monitoring tips.",
    },
    ServiceOffer {
        title: "Clinical Nutrition",
        summary: "GI, PCOS, thyroid and more",
        detail: "Condition-focused nutrition with evidence-backed protocols.",
    },
];

pub const ABOUT_BIO: &str = "Dietitian with a M.Sc. in Food Science, Nutrition & Dietetics and currently pursuing a Ph.D. in Nutrition and Dietetics. Special interest in lifestyle medicine and diabetes management. Evidence-based, compassionate and practical advice that fits into your life.";

pub const CREDENTIALS: &[&str] = &[
    "M.Sc. Food Science, Nutrition & Dietetics",
    "Pursuing Ph.D in Nutrition and Dietetics",
    "Experience with hospitals & community programs",
    "Practical meal plans and recipes",
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sita R",
        quote: "Helped me lose 8 kg in 3 months with realistic meal plans!",
    },
    Testimonial {
        name: "Ramesh K",
        quote: "Practical advice and great follow-up. My diabetes numbers improved.",
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Do you offer teleconsultations?",
        answer: "Yes — via video call or phone. Perfect for follow-ups or remote patients.",
    },
    FaqEntry {
        question: "How many follow-ups are needed?",
        answer: "Typically 2-4 follow-ups initially, then monthly/quarterly depending on goals.",
    },
];

/// (days, hours)
pub const OPENING_HOURS: &[(&str, &str)] = &[
    ("Mon - Fri", "9:30 AM - 6:30 PM"),
    ("Sat", "10:00 AM - 2:00 PM"),
    ("Sun", "Closed"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_anchors_are_unique() {
        let ids: HashSet<_> = NAV_SECTIONS.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), NAV_SECTIONS.len());
    }

    #[test]
    fn test_copy_is_not_empty() {
        assert!(SERVICES.iter().all(|s| !s.title.is_empty() && !s.detail.is_empty()));
        assert!(FAQS.iter().all(|f| !f.question.is_empty() && !f.answer.is_empty()));
        assert!(!TESTIMONIALS.is_empty());
    }
}
