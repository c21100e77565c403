use yew::prelude::*;
use log::debug;

use crate::catalog::{Icon, ServiceEntry, ValueProposition, SERVICES, STATS, VALUE_PROPOSITIONS};
use crate::components::animated_section::AnimatedSection;
use crate::components::contact_form::ContactForm;

pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80";

fn service_card(service: &ServiceEntry) -> Html {
    html! {
        <AnimatedSection key={service.title}>
            <div class="service-card">
                <div class="service-icon">
                    {service.icon.render("service-icon-glyph")}
                </div>
                <h3>{service.title}</h3>
                <p>{service.description}</p>
            </div>
        </AnimatedSection>
    }
}

fn value_item(prop: &ValueProposition) -> Html {
    html! {
        <AnimatedSection key={prop.title}>
            <div class="value-item">
                <div class="value-icon">
                    {prop.icon.render("value-icon-glyph")}
                </div>
                <div>
                    <h3>{prop.title}</h3>
                    <p>{prop.description}</p>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let contact_open = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_contact = {
        let contact_open = contact_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Opening contact form");
            contact_open.set(true);
        })
    };

    let close_contact = {
        let contact_open = contact_open.clone();
        Callback::from(move |_| {
            debug!("Closing contact form");
            contact_open.set(false);
        })
    };

    html! {
        <div class="landing-page">
            <header class="hero" style={format!("background-image: url({});", HERO_IMAGE_URL)}>
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <AnimatedSection>
                        {Icon::Code.render("hero-icon")}
                        <h1 class="hero-title">{"ScriptSolutions"}</h1>
                        <p class="hero-subtitle">
                            {"Potencia tu Proyecto con Nuestras Soluciones Digitales"}
                        </p>
                        <div class="hero-scroll-cue">
                            {Icon::ChevronDown.render("hero-chevron")}
                        </div>
                    </AnimatedSection>
                </div>
            </header>

            <section class="about-section">
                <AnimatedSection class="section-heading">
                    <h2>{"Impulsando tu Microemprendimiento"}</h2>
                    <p>
                        {"Transformamos ideas en experiencias digitales de alto impacto, combinando creatividad, tecnología y estrategia"}
                    </p>
                </AnimatedSection>
                <div class="services-grid">
                    { for SERVICES.iter().map(service_card) }
                </div>
            </section>

            <section class="why-section">
                <AnimatedSection class="section-heading">
                    <h2>{"¿Por qué elegir ScriptSolutions?"}</h2>
                    <p>
                        {"Transformamos visiones en realidades digitales con un enfoque único y orientado a resultados"}
                    </p>
                </AnimatedSection>
                <div class="value-list">
                    { for VALUE_PROPOSITIONS.iter().map(value_item) }
                </div>
            </section>

            <section class="stats-section">
                <AnimatedSection>
                    <div class="stats-grid">
                        { for STATS.iter().map(|stat| html! {
                            <div class="stat" key={stat.label}>
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </AnimatedSection>
            </section>

            <section class="cta-section">
                <AnimatedSection>
                    {Icon::Globe.render("cta-icon")}
                    <h2>{"¿Listo para Transformar tu Presencia Digital?"}</h2>
                    <p>{"Creemos algo extraordinario juntos"}</p>
                    <button class="cta-button" onclick={open_contact}>
                        {"Comenzar"}
                    </button>
                </AnimatedSection>
            </section>

            <ContactForm is_open={*contact_open} on_close={close_contact} />

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #020304;
                    color: #ffffff;
                    overflow-x: hidden;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .icon {
                    font-style: normal;
                    display: inline-block;
                    line-height: 1;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background-size: cover;
                    background-position: center;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(1, 38, 119, 0.8), #020304);
                }

                .hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    padding: 0 1rem;
                }

                .hero-icon {
                    font-size: 4rem;
                    color: #012677;
                    margin-bottom: 2rem;
                }

                .hero-title {
                    font-size: 4.5rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(to right, #fff, #93c5fd);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.5rem;
                    color: #dbeafe;
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .hero-scroll-cue {
                    margin-top: 3rem;
                    font-size: 3rem;
                    color: #93c5fd;
                    animation: bounce 1s infinite;
                }

                .about-section,
                .why-section,
                .stats-section,
                .cta-section {
                    padding: 5rem 1rem;
                }

                .about-section {
                    background: linear-gradient(to bottom, #020304, rgba(1, 38, 119, 0.2));
                }

                .why-section {
                    background: linear-gradient(to bottom, #020304, rgba(1, 38, 119, 0.1), #020304);
                }

                .cta-section {
                    text-align: center;
                    background: linear-gradient(to top, #020304, rgba(1, 38, 119, 0.2));
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-heading h2,
                .cta-section h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                }

                .section-heading p,
                .cta-section p {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 80rem;
                    margin: 4rem auto 0;
                }

                .service-card {
                    height: 100%;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: linear-gradient(to bottom right, rgba(1, 38, 119, 0.2), rgba(1, 38, 119, 0.05));
                    backdrop-filter: blur(4px);
                    border: 1px solid rgba(1, 38, 119, 0.2);
                    text-align: center;
                    transition: border-color 0.3s ease;
                    box-sizing: border-box;
                }

                .service-card:hover {
                    border-color: rgba(1, 38, 119, 0.4);
                }

                .service-icon {
                    font-size: 3rem;
                    color: #60a5fa;
                    margin-bottom: 1.5rem;
                }

                .service-card h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .service-card p {
                    color: #9ca3af;
                }

                .value-list {
                    max-width: 56rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }

                .value-item {
                    display: flex;
                    align-items: flex-start;
                    gap: 1.5rem;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: linear-gradient(to right, rgba(1, 38, 119, 0.1), transparent);
                    border: 1px solid rgba(1, 38, 119, 0.2);
                    transition: border-color 0.3s ease;
                }

                .value-item:hover {
                    border-color: rgba(1, 38, 119, 0.4);
                }

                .value-icon {
                    flex-shrink: 0;
                    padding: 0.75rem;
                    font-size: 2rem;
                    background: rgba(1, 38, 119, 0.2);
                    border-radius: 0.5rem;
                }

                .value-item h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                    color: #dbeafe;
                }

                .value-item p {
                    color: #9ca3af;
                    line-height: 1.6;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    text-align: center;
                }

                .stat-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #012677;
                }

                .stat-label {
                    color: #9ca3af;
                    margin-top: 0.5rem;
                }

                .cta-icon {
                    font-size: 4rem;
                    color: #60a5fa;
                    margin-bottom: 2rem;
                }

                .cta-section p {
                    margin-bottom: 3rem;
                }

                .cta-button {
                    padding: 1rem 2rem;
                    background: #012677;
                    color: white;
                    border: none;
                    border-radius: 9999px;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .cta-button:hover {
                    background: rgba(1, 38, 119, 0.8);
                    transform: scale(1.05);
                }

                @keyframes bounce {
                    0%, 100% { transform: translateY(-25%); }
                    50% { transform: none; }
                }

                @media (max-width: 1024px) {
                    .services-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 2.5rem;
                    }

                    .hero-subtitle {
                        font-size: 1.125rem;
                    }

                    .section-heading h2,
                    .cta-section h2 {
                        font-size: 1.875rem;
                    }

                    .services-grid {
                        grid-template-columns: 1fr;
                    }

                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_html;

    #[test]
    fn one_card_per_service_in_catalog_order() {
        let html = render_html::<Landing>(());
        assert_eq!(html.matches("class=\"service-card\"").count(), SERVICES.len());

        let positions: Vec<usize> = SERVICES
            .iter()
            .map(|service| {
                html.find(&format!("<h3>{}</h3>", service.title))
                    .unwrap_or_else(|| panic!("missing card for {}", service.title))
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "cards out of order");
    }

    #[test]
    fn contact_modal_starts_closed() {
        let html = render_html::<Landing>(());
        assert!(!html.contains("<form"));
        assert!(html.contains("Comenzar"));
    }
}
