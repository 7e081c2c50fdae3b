//! Portfolio landing page.
//!
//! Static sections plus the chat entry points. The chat popup and the
//! identification modal are mounted once here; every `ChatTrigger` on the
//! page drives the same controller.

use leptos::prelude::*;

use crate::components::chat_trigger::ChatTrigger;
use crate::components::chat_widget::ChatWidget;
use crate::components::consent_controls::ConsentControls;
use crate::components::identify_modal::IdentifyModal;
use crate::components::site_nav::SiteNav;

struct Role {
    company: &'static str,
    title: &'static str,
    period: &'static str,
    logo: &'static str,
}

const ROLES: &[Role] = &[
    Role {
        company: "Independent",
        title: "Software Engineer",
        period: "2021 - present",
        logo: "/assets/images/independent-logo.svg",
    },
    Role {
        company: "Platform Team",
        title: "Backend Engineer",
        period: "2017 - 2021",
        logo: "/assets/images/platform-logo.svg",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SiteNav/>
        <main class="home">
            <section id="about" class="home__hero">
                <img
                    class="home__portrait"
                    src="/assets/images/profile.jpg"
                    alt="Portrait"
                    loading="lazy"
                    width="400"
                    height="400"
                />
                <div class="home__intro">
                    <h1>"Hi, I build software."</h1>
                    <p>"Systems, services and the occasional user interface. Ask the assistant anything about my work."</p>
                    <ChatTrigger label="Chat with my assistant"/>
                </div>
            </section>

            <section id="experience" class="home__section">
                <h2>"Experience"</h2>
                <ul class="home__roles">
                    {ROLES
                        .iter()
                        .map(|role| {
                            view! {
                                <li class="home__role">
                                    <img class="home__role-logo" src=role.logo alt=role.company loading="lazy" width="80" height="80"/>
                                    <div>
                                        <div class="home__role-title">{role.title}</div>
                                        <div class="home__role-meta">{role.company}" · "{role.period}</div>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section id="projects" class="home__section">
                <h2>"Projects"</h2>
                <p>"Curious about a specific project? The assistant knows the details."</p>
                <ChatTrigger label="Ask about my projects" class="btn"/>
            </section>

            <section id="contact" class="home__section">
                <h2>"Contact"</h2>
                <p>"Start a conversation and leave your details; I will follow up."</p>
                <ChatTrigger label="Get in touch" class="btn btn--primary"/>
            </section>
        </main>

        <footer class="site-footer">
            <ConsentControls/>
        </footer>

        // Inert until analytics consent is granted.
        <script type="text/plain" data-cookie-consent="analytics" data-src="/assets/js/analytics.js"></script>

        <ChatWidget/>
        <IdentifyModal/>
    }
}
