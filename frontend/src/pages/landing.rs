use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::ScrollConfig;
use crate::nav::scroll_to;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Course {
    pub title: &'static str,
    /// Classroom plus practical workload.
    pub hours: u16,
    pub summary: &'static str,
}

pub const COURSES: &[Course] = &[
    Course {
        title: "Working at Height",
        hours: 8,
        summary: "Fall protection systems, anchorage points, rescue planning and harness inspection.",
    },
    Course {
        title: "Confined Space Entry",
        hours: 16,
        summary: "Atmosphere testing, permit-to-work, entrant and attendant duties, emergency retrieval.",
    },
    Course {
        title: "Electrical Safety",
        hours: 40,
        summary: "Lockout/tagout, arc flash awareness, safe work on and near energized installations.",
    },
    Course {
        title: "Fire Brigade & Evacuation",
        hours: 24,
        summary: "Fire behaviour, extinguisher and hose handling, evacuation drills and first response.",
    },
    Course {
        title: "Forklift Operation",
        hours: 16,
        summary: "Pre-use checks, load stability, pedestrian zones and practical driving assessment.",
    },
    Course {
        title: "First Aid at Work",
        hours: 8,
        summary: "Primary assessment, CPR and AED use, bleeding control and incident reporting.",
    },
];

pub const PROCESS_STEPS: &[(&str, &str)] = &[
    (
        "Request a quote",
        "Tell us which courses you need, how many people and where.",
    ),
    (
        "Plan together",
        "We adapt the content to your site's hazards and book dates around your shifts.",
    ),
    (
        "Train on site",
        "Certified instructors run theory and hands-on practice at your facility or ours.",
    ),
    (
        "Certify",
        "Every participant who passes the assessment receives a dated, verifiable certificate.",
    ),
];

/// Credentials shown beside the sample documents.
pub const CREDENTIALS: &[&str] = &["Training licence No. 12345", "Accredited by the Ministry of Labour"];

/// Sample documents participants receive.
pub const SAMPLE_DOCUMENTS: &[&str] = &["Certificate", "Assessment protocol"];

/// (label, value, href)
pub const CONTACT_DETAILS: &[(&str, &str, Option<&str>)] = &[
    ("Phone", "+1 (555) 010-0199", Some("tel:+15550100199")),
    ("Email", "info@safeline.academy", Some("mailto:info@safeline.academy")),
    ("Office", "Suite 1200, Federation Tower, Harbour District", None),
];

const STATS: &[(&str, &str)] = &[
    ("2.9M", "non-fatal workplace injuries reported each year"),
    ("1 in 5", "workplace fatalities happen in construction and industry"),
    ("4x", "typical return on every dollar invested in safety training"),
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_request_quote: Callback<()>,
    #[prop_or_default]
    pub config: ScrollConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let request_quote = {
        let on_request_quote = props.on_request_quote.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_request_quote.emit(());
        })
    };

    html! {
        <main class="landing-page">
            <section id="top" class="hero">
                <div class="hero-content">
                    <span class="eyebrow">{"Industrial safety training"}</span>
                    <h1>{"Every shift ends with everyone going home"}</h1>
                    <p class="hero-subtitle">
                        {"Hands-on, regulation-compliant safety courses for industrial teams, delivered by instructors who have worked the floor."}
                    </p>
                    <div class="hero-actions">
                        <button class="primary-button" onclick={request_quote.clone()}>
                            {"Request a quote"}
                        </button>
                        <a href="#courses" class="secondary-button" onclick={scroll_to("courses", props.config)}>
                            {"See courses"}
                        </a>
                    </div>
                </div>
            </section>

            <section id="about" class="content-section">
                <h2>{"About us"}</h2>
                <p>
                    {"Safeline Academy trains operators, technicians and supervisors across manufacturing, energy, logistics and construction. Our instructors are certified safety professionals with years of field experience, and every course pairs the regulatory theory with practice on real equipment."}
                </p>
                <p>
                    {"We run open classes at our training centre and in-company sessions at your site, scheduled around your production."}
                </p>
            </section>

            <section id="importance" class="content-section dark">
                <h2>{"Why safety training matters"}</h2>
                <p>
                    {"Most serious incidents trace back to a missed procedure or an unrecognised hazard. Trained teams spot risks earlier, respond faster and keep operations running."}
                </p>
                <div class="stats-grid">
                    {
                        for STATS.iter().map(|(value, caption)| html! {
                            <div class="stat">
                                <span class="stat-value">{*value}</span>
                                <span class="stat-caption">{*caption}</span>
                            </div>
                        })
                    }
                </div>
            </section>

            <section id="courses" class="content-section">
                <h2>{"Courses"}</h2>
                <div class="course-grid">
                    {
                        for COURSES.iter().map(|course| html! {
                            <article class="course-card" key={course.title}>
                                <h3>{course.title}</h3>
                                <span class="course-hours">{format!("{} hours", course.hours)}</span>
                                <p>{course.summary}</p>
                                <button class="course-enrol" onclick={request_quote.clone()}>
                                    {"Enrol your team"}
                                </button>
                            </article>
                        })
                    }
                </div>
            </section>

            <section id="process" class="content-section dark">
                <h2>{"How it works"}</h2>
                <ol class="process-steps">
                    {
                        for PROCESS_STEPS.iter().enumerate().map(|(index, (title, text))| html! {
                            <li class="process-step">
                                <span class="step-number">{(index + 1).to_string()}</span>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </li>
                        })
                    }
                </ol>
            </section>

            <section id="documents" class="content-section documents">
                <h2>{"Documents"}</h2>
                <div class="documents-layout">
                    <div>
                        <h3>{"Sample documents we issue"}</h3>
                        <p>
                            {"Every certificate and assessment protocol we issue is entered in the national training records registry, so it holds up in any labour inspection."}
                        </p>
                        <ul class="credentials">
                            { for CREDENTIALS.iter().map(|credential| html! { <li>{*credential}</li> }) }
                        </ul>
                    </div>
                    <div class="document-samples">
                        {
                            for SAMPLE_DOCUMENTS.iter().map(|name| html! {
                                <div class="document-sample">
                                    <span>{*name}</span>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section id="contacts" class="content-section contact">
                <h2>{"Ready to train your team?"}</h2>
                <p>{"Send us a request and a specialist will put together the right programme for your company."}</p>
                <div class="contact-card">
                    <dl class="contact-details">
                        {
                            for CONTACT_DETAILS.iter().map(|(label, value, href)| html! {
                                <div class="contact-detail">
                                    <dt>{*label}</dt>
                                    <dd>
                                        {
                                            match href {
                                                Some(href) => html! { <a href={*href}>{*value}</a> },
                                                None => html! { <span>{*value}</span> },
                                            }
                                        }
                                    </dd>
                                </div>
                            })
                        }
                    </dl>
                    <button class="primary-button" onclick={request_quote}>
                        {"Request a quote"}
                    </button>
                </div>
            </section>

            <footer class="site-footer">
                <p>{"© Safeline Academy. Industrial safety training."}</p>
            </footer>

            <style>
                {r#"
                .landing-page {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #111827;
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 120px 1.5rem 4rem;
                    background: linear-gradient(135deg, #111827 0%, #1f2937 60%, #78350f 100%);
                    color: #fff;
                }
                .hero-content {
                    max-width: 760px;
                    text-align: center;
                }
                .eyebrow {
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                    color: #f59e0b;
                    font-size: 0.85rem;
                }
                .hero h1 {
                    font-size: clamp(2.2rem, 5vw, 3.5rem);
                    margin: 1rem 0;
                }
                .hero-subtitle {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 1.15rem;
                    line-height: 1.6;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    margin-top: 2rem;
                    flex-wrap: wrap;
                }
                .primary-button {
                    background: #f59e0b;
                    color: #111827;
                    border: none;
                    border-radius: 8px;
                    padding: 0.9rem 1.6rem;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .secondary-button {
                    border: 1px solid rgba(255, 255, 255, 0.5);
                    color: #fff;
                    border-radius: 8px;
                    padding: 0.9rem 1.6rem;
                    text-decoration: none;
                }
                .content-section {
                    padding: 5rem 1.5rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    line-height: 1.7;
                }
                .content-section.dark {
                    max-width: none;
                    background: #111827;
                    color: #e5e7eb;
                }
                .content-section.dark > * {
                    max-width: 1100px;
                    margin-left: auto;
                    margin-right: auto;
                }
                .stats-grid,
                .course-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .stat-value {
                    display: block;
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #f59e0b;
                }
                .course-card {
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .course-hours {
                    color: #b45309;
                    font-weight: 600;
                    font-size: 0.9rem;
                }
                .course-enrol {
                    margin-top: auto;
                    align-self: flex-start;
                    background: none;
                    border: 1px solid #111827;
                    border-radius: 6px;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }
                .process-steps {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .step-number {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: #f59e0b;
                    color: #111827;
                    font-weight: 700;
                }
                .documents-layout {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                    align-items: center;
                }
                .credentials {
                    list-style: none;
                    padding: 0;
                    color: #b45309;
                    font-weight: 600;
                }
                .document-samples {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .document-sample {
                    aspect-ratio: 3 / 4;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid #e5e7eb;
                    border-radius: 8px;
                    background: linear-gradient(135deg, #f9fafb, #fff);
                    color: #6b7280;
                    transform: rotate(-2deg);
                    transition: transform 0.3s ease;
                }
                .document-sample:nth-child(2) {
                    transform: rotate(2deg) translateY(2rem);
                }
                .document-sample:hover {
                    transform: none;
                }
                .contact {
                    text-align: center;
                }
                .contact-card {
                    max-width: 860px;
                    margin: 2rem auto 0;
                    padding: 2rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 20px;
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.08);
                }
                .contact-details {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1.5rem;
                    margin: 0 0 2rem;
                    text-align: left;
                }
                .contact-detail dt {
                    color: #6b7280;
                    font-size: 0.85rem;
                }
                .contact-detail dd {
                    margin: 0;
                    font-weight: 600;
                }
                .site-footer {
                    text-align: center;
                    padding: 2rem;
                    color: #6b7280;
                    border-top: 1px solid #e5e7eb;
                }
                "#}
            </style>
        </main>
    }
}
