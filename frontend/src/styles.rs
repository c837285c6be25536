//! Inline CSS for the interactive effects.
//!
//! Layout and colours come from Tailwind utility classes loaded by
//! `index.html`; this sheet only carries what utilities cannot express:
//! the dynamic button transitions, the `pressed` flash, the hero marquee
//! and the service card popup.

/// Stylesheet injected once by [`crate::App`].
pub const SITE_CSS: &str = r#"
.btn-dynamic {
    transition: transform .18s ease, box-shadow .18s ease;
    box-shadow: 0 6px 18px rgba(6, 95, 70, 0.08);
}
.btn-dynamic:hover { transform: scale(1.05); }
.btn-dynamic:active, .pressed { transform: scale(.95); }

.marquee { overflow: hidden; }
.moving-track {
    display: flex;
    gap: 2rem;
    align-items: center;
    width: 200%;
    transform: translateX(0);
    animation: scroll var(--speed, 12s) linear infinite;
}
.moving-track span { white-space: nowrap; }
@keyframes scroll {
    0% { transform: translateX(0%); }
    100% { transform: translateX(-50%); }
}

.service-card { position: relative; overflow: visible; }
.service-popup {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(2, 120, 96, 0.04);
    border-radius: 12px;
    opacity: 0;
    transform: translateY(6px) scale(.98);
    transition: opacity .18s ease, transform .18s ease, box-shadow .18s ease;
    pointer-events: none;
}
.service-card:hover .service-popup {
    opacity: 1;
    transform: translateY(0) scale(1);
    pointer-events: auto;
    box-shadow: 0 14px 40px rgba(6, 95, 70, 0.08);
}
.service-popup-inner {
    max-width: 260px;
    padding: 12px;
    background: white;
    border-radius: 10px;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
    text-align: center;
}
"#;
