use chrono::Datelike;
use log::{error, info};
use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::media_gallery::MediaGallery;
use crate::components::ui::{BrandButton, ButtonVariant, Card, Pill, Section, Stat};
use crate::config::{self, CONTACT_EMAIL, LINKS, NAV_LINKS};
use crate::media::video::VideoDescriptor;

#[derive(Properties, PartialEq, Default)]
pub struct SiteProps {
    /// Overrides the bundled catalog.
    #[prop_or_default]
    pub videos: Option<Vec<VideoDescriptor>>,
}

fn load_catalog() -> Vec<VideoDescriptor> {
    match config::video_catalog() {
        Ok(videos) => {
            info!("Loaded {} videos", videos.len());
            videos
        }
        Err(e) => {
            error!("Video catalog unusable, media gallery left empty: {}", e);
            Vec::new()
        }
    }
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="site-header" style="background: var(--brand-navy); border-color: #0d2a52;">
            <div class="header-inner">
                <a href="#home" class="header-logo">
                    <div class="logo-mark" style={format!("background: {};", config::gold_gradient())}></div>
                    <span class="logo-text">{"D3 • Dorian Franklin"}</span>
                </a>
                <nav class="header-nav">
                    {
                        NAV_LINKS.iter().map(|(href, label)| {
                            html! {
                                <a key={*href} href={*href} class="nav-link">{*label}</a>
                            }
                        }).collect::<Html>()
                    }
                </nav>
                <a href="#contact">
                    <BrandButton class="header-cta">{"Partner with Dorian"}</BrandButton>
                </a>
            </div>
        </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let photo_failed = use_state(|| false);
    let on_photo_error = {
        let photo_failed = photo_failed.clone();
        Callback::from(move |_: Event| photo_failed.set(true))
    };

    html! {
        <section id="home" class="hero">
            <div class="hero-glow"></div>
            <div class="hero-grid">
                <div>
                    <Pill>{"Student‑Athlete • WR | DB | ST • Class of 2027"}</Pill>
                    <h1 class="hero-title">{"Dorian \"D3\" Franklin"}</h1>
                    <p class="hero-copy">
                        {"St. John Bosco (Bellflower, CA) • 4.0 GPA • Freshman & Sophomore ASB President; Current Junior Vice President. "}
                        {"Lockdown coverage at Nickel & Corner. Author of the "}
                        <span class="strong">{"Train, Build, Brand"}</span>
                        {" Journal. Creator of "}
                        <span class="strong">{"The NIL Network"}</span>
                        {" and host of the "}
                        <span class="strong">{"D3cision Podcast"}</span>
                        {"."}
                    </p>
                    <div class="hero-actions">
                        <a href="#media">
                            <BrandButton>
                                <IconSvg icon={Icon::PlayCircle} />
                                {" Watch Highlights"}
                            </BrandButton>
                        </a>
                        <a href="#nil">
                            <BrandButton variant={ButtonVariant::Outline}>
                                {"Join The NIL Network "}
                                <IconSvg icon={Icon::ArrowRight} />
                            </BrandButton>
                        </a>
                    </div>
                    <div class="stat-row">
                        <Stat label="GPA" value="4.0" />
                        <Stat label="INTs (’24)" value="2" />
                        <Stat label="Offers" value="6+" />
                    </div>
                </div>
                <div class="hero-photo">
                    if *photo_failed {
                        <div class="hero-photo-placeholder">
                            <span>{"D3 • Placeholder Image"}</span>
                        </div>
                    } else {
                        <img
                            src={config::asset_url("hero.jpeg")}
                            alt="Dorian Franklin Hero Photo"
                            onerror={on_photo_error}
                        />
                    }
                </div>
            </div>
        </section>
    }
}

fn about() -> Html {
    html! {
        <Section
            id="about"
            eyebrow="About Dorian"
            title="Student. Leader. Playmaker."
            subtitle="Focused on faith, academics, and elite football fundamentals — and helping other athletes win in the NIL era."
        >
            <div class="grid-3">
                <Card title="Academics" icon={Icon::GraduationCap}>
                    <p>{"Dorian applies the same focus in the classroom that he brings to the field — challenging himself through advanced coursework, earning college credits, and leading his peers at St. John Bosco."}</p>
                    <p>{"Current Coursework: AP Physics 1 • AP Calculus AB • AP English Language & Composition • U.S. History • Religion • Film & Media"}</p>
                    <p>{"Dual-Enrollment (Los Angeles Southwest College): Afro-American History • Interpersonal Communications. On pace to earn an Associate of Arts (A.A.) degree in Communications by Spring 2026."}</p>
                    <p>{"Academic interests in Law, Business, and Media."}</p>
                </Card>
                <Card title="Positions" icon={Icon::Shield}>
                    <p>{"Defensive Back (Nickel/Corner), Wide Receiver, and Special Teams. Known for eye discipline, leverage, and technique."}</p>
                    <p>{"Leadership & Service: Freshman & Sophomore Class President. Current Junior Vice President, St. John Bosco High School. BOSS Program Ambassador — mentoring younger students through leadership and academic excellence."}</p>
                </Card>
                <Card title="Training" icon={Icon::Dumbbell}>
                    <p>{"Dorian's development is built on discipline, competition, and consistency — balancing strength & conditioning, film study, and position mastery year-round."}</p>
                    <p>{"He plays with the Trillion Boys 7v7 team and trains with Anthony Brown of Ground Zero. \"No shortcuts. No excuses. Just keep going.\""}</p>
                </Card>
            </div>
        </Section>
    }
}

fn athletics() -> Html {
    html! {
        <Section
            id="athletics"
            eyebrow="Athletics"
            title="Impact plays. Championship standard."
            subtitle="Highlights, measurables, and recent performances."
        >
            <div class="grid-3">
                <Card title="Team Accolades" icon={Icon::Trophy}>
                    <p>{"Division 1 state champions & national contenders with St. John Bosco. 2025 win vs #19 Orange Lutheran with game‑swing INT."}</p>
                </Card>
                <Card title="Measurables">
                    <ul class="plain-list">
                        <li>{"Height/Weight: 5'11\" - 178lbs"}</li>
                        <li>{"40: 4.54/ Shuttle / Vert:"}</li>
                        <li>{"Wingspan / Hand: Wide"}</li>
                    </ul>
                </Card>
                <Card title="Recent Stats">
                    <ul class="plain-list">
                        <li>{"9 tackles, 1 INT (momentum shift) vs Orange Lutheran"}</li>
                        <li>{"Special Teams: kickoff tackles; punt return unit"}</li>
                        <li>{"WR: key blocks; possession catch"}</li>
                    </ul>
                </Card>
            </div>
        </Section>
    }
}

fn nil_network() -> Html {
    html! {
        <Section
            id="nil"
            eyebrow="The NIL Network"
            title="A community by athletes, for athletes."
            subtitle="Dorian’s hub for NIL education, deals, and mentorship. Join and be part of the first 100 members club."
        >
            <div class="grid-2">
                <div class="stack">
                    <p>{"Inside you’ll find playbooks, live workshops, brand deal templates, and a network of athletes, parents, agents, and creators who move with strategy."}</p>
                    <ul class="bullet-list">
                        <li>{"Starter Pack: outreach scripts, rate card, media kit"}</li>
                        <li>{"Brand‑Ready content prompts & weekly challenges"}</li>
                        <li>{"Office hours with Dorian & guest mentors"}</li>
                    </ul>
                    <div class="button-row">
                        <a href={LINKS.skool} target="_blank" rel="noreferrer">
                            <BrandButton>
                                {"Join on Skool "}
                                <IconSvg icon={Icon::ArrowRight} />
                            </BrandButton>
                        </a>
                        <a href={LINKS.train_build_brand} target="_blank" rel="noreferrer">
                            <BrandButton variant={ButtonVariant::Outline}>{"TrainBuildBrand.com"}</BrandButton>
                        </a>
                    </div>
                </div>
                <Card>
                    <div class="why-join">
                        <div class="why-join-mark"></div>
                        <p>{"Why join?"}</p>
                    </div>
                    <div class="grid-2 tight">
                        <Stat label="Members Goal" value="100" />
                        <Stat label="Weekly Sessions" value="2" />
                        <Stat label="Templates" value="25+" />
                        <Stat label="Partners" value="10+" />
                    </div>
                </Card>
            </div>
        </Section>
    }
}

fn podcast() -> Html {
    html! {
        <Section
            id="podcast"
            eyebrow="D3cision Podcast"
            title="Conversations with the next wave."
            subtitle="Recorded in‑studio and on the road. Athletes, coaches, and creators — real stories, real game."
        >
            <div class="grid-3">
                {
                    (1..=3).map(|episode| {
                        html! {
                            <Card key={episode} title={format!("Episode {}", episode)} icon={Icon::Mic}>
                                <div class="episode-art"></div>
                                <p>{"Guest teaser, key insight, and a pull‑quote that highlights mindset and actionable takeaways."}</p>
                                <BrandButton variant={ButtonVariant::Outline} class="full-width">
                                    <IconSvg icon={Icon::PlayCircle} />
                                    {" Play"}
                                </BrandButton>
                            </Card>
                        }
                    }).collect::<Html>()
                }
            </div>
        </Section>
    }
}

#[function_component(Journal)]
fn journal() -> Html {
    let cover_failed = use_state(|| false);
    let on_cover_error = {
        let cover_failed = cover_failed.clone();
        Callback::from(move |_: Event| cover_failed.set(true))
    };

    html! {
        <Section
            id="journal"
            eyebrow="Journal"
            title="Train, Build, Brand — The Journal"
            subtitle="Training your body, brain & brand. A guided system for the modern student‑athlete."
        >
            <div class="grid-2">
                <Card>
                    <div class="journal-cover" style={if *cover_failed { "display: none;" } else { "" }}>
                        <img
                            src={config::asset_url("journal-cover.jpg")}
                            alt="Train, Build, Brand Journal Cover"
                            onerror={on_cover_error}
                        />
                    </div>
                    <p>{"Built for 12 weeks of performance: daily training logs, mindset prompts, weekly reflection, NIL content prompts, and deal tracking."}</p>
                    <div class="button-row">
                        <a href={LINKS.train_build_brand} target="_blank" rel="noreferrer">
                            <BrandButton>{"Learn more"}</BrandButton>
                        </a>
                        <a href={LINKS.train_build_brand} target="_blank" rel="noreferrer">
                            <BrandButton variant={ButtonVariant::Outline}>{"Get the Journal"}</BrandButton>
                        </a>
                    </div>
                </Card>
                <div class="stack">
                    <h3 class="subheading">{"What’s inside"}</h3>
                    <ul class="bullet-list">
                        <li>{"Body: lifts, mobility, recovery, nutrition"}</li>
                        <li>{"Brain: goals, habits, gratitude, film notes"}</li>
                        <li>{"Brand: content prompts, sponsor outreach, analytics"}</li>
                        <li>{"Weekly review & game day checklists"}</li>
                        <li>{"Quarterly recap to plan the next phase"}</li>
                    </ul>
                    <p class="small">
                        {"Prefer digital? We can ship a PDF version. Email "}
                        <a class="underline" href={LINKS.email}>{CONTACT_EMAIL}</a>
                        {"."}
                    </p>
                </div>
            </div>
        </Section>
    }
}

// The form is display-only; nothing is submitted.
fn contact() -> Html {
    html! {
        <Section
            id="contact"
            eyebrow="Contact"
            title="Partnerships, speaking, and media"
            subtitle="For NIL brand deals, campus visits, and interview requests, reach out below."
        >
            <div class="grid-2">
                <Card>
                    <div class="contact-form">
                        <label>{"Name"}</label>
                        <input placeholder="Your name" />
                        <label>{"Email"}</label>
                        <input type="email" placeholder="you@brand.com" />
                        <label>{"Message"}</label>
                        <textarea rows="4" placeholder="Tell us about the opportunity" />
                        <BrandButton class="full-width">{"Send"}</BrandButton>
                        <p class="form-note">{"This demo form does not submit."}</p>
                    </div>
                </Card>
                <div class="contact-links">
                    <div class="contact-line">
                        <IconSvg icon={Icon::Mail} size={20} />
                        <a href={LINKS.email}>{CONTACT_EMAIL}</a>
                    </div>
                    <div class="contact-line">
                        <IconSvg icon={Icon::Instagram} size={20} />
                        <a href={LINKS.instagram} target="_blank" rel="noreferrer">{"@_iamd3_ (Instagram)"}</a>
                    </div>
                    <div class="contact-line">
                        <IconSvg icon={Icon::Youtube} size={20} />
                        <a href="#podcast">{"D3cision Podcast (YouTube)"}</a>
                    </div>
                    <div class="contact-line">
                        <IconSvg icon={Icon::Link} size={20} />
                        <a href={LINKS.skool} target="_blank" rel="noreferrer">{"The NIL Network Community"}</a>
                    </div>
                    <div class="contact-line">
                        <IconSvg icon={Icon::Link} size={20} />
                        <a href={LINKS.train_build_brand} target="_blank" rel="noreferrer">{"TrainBuildBrand.com"}</a>
                    </div>
                </div>
            </div>
        </Section>
    }
}

fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <p>{format!("© {} D3 Media Brand • All rights reserved.", year)}</p>
                <div class="footer-links">
                    <a href="#about">{"About"}</a>
                    <a href="#nil">{"NIL"}</a>
                    <a href="#podcast">{"Podcast"}</a>
                    <a href="#contact">{"Contact"}</a>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Site)]
pub fn site(props: &SiteProps) -> Html {
    let videos = use_memo(
        |videos: &Option<Vec<VideoDescriptor>>| videos.clone().unwrap_or_else(load_catalog),
        props.videos.clone(),
    );

    html! {
        <div id="dorian-root" data-testid="root" class="site-root" style={config::css_vars()}>
            <Header />
            <Hero />
            { about() }
            { athletics() }
            { nil_network() }
            { podcast() }
            <Journal />
            <Section
                id="media"
                eyebrow="Media"
                title="Highlights & Press"
                subtitle="Select clips, reels, and features."
            >
                <MediaGallery videos={(*videos).clone()} />
            </Section>
            { contact() }
            { footer() }
            <style>
                {r#"
                .site-root {
                    min-height: 100vh;
                    color: var(--brand-gray);
                    background: var(--brand-cream);
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .site-root a {
                    color: inherit;
                    text-decoration: none;
                }
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    width: 100%;
                    border-bottom: 1px solid;
                }
                .header-inner, .footer-inner, .section-inner, .hero-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .header-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding-top: 0.75rem;
                    padding-bottom: 0.75rem;
                }
                .header-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .logo-mark {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 0.75rem;
                    box-shadow: 0 0 0 2px var(--brand-gold-dark);
                }
                .logo-text {
                    font-size: 0.875rem;
                    font-weight: 600;
                    letter-spacing: 0.025em;
                    color: var(--brand-cream);
                }
                .header-nav {
                    display: none;
                    gap: 1.5rem;
                }
                .nav-link {
                    font-size: 0.875rem;
                    color: rgba(248, 243, 231, 0.9) !important;
                }
                .brand-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.25rem;
                    border-radius: 0.75rem;
                    padding: 0.6rem 1.1rem;
                    font-size: 0.9rem;
                    font-weight: 500;
                    cursor: pointer;
                    border: 1px solid transparent;
                }
                .brand-button.outline {
                    background: transparent;
                    border: 1px solid;
                }
                .full-width {
                    width: 100%;
                }
                .hero {
                    position: relative;
                    overflow: hidden;
                }
                .hero-glow {
                    position: absolute;
                    top: -8rem;
                    left: 50%;
                    width: 600px;
                    height: 600px;
                    transform: translateX(-50%);
                    border-radius: 50%;
                    filter: blur(64px);
                    background: rgba(193, 164, 92, 0.25);
                }
                .hero-grid {
                    position: relative;
                    display: grid;
                    grid-template-columns: 1fr;
                    align-items: center;
                    gap: 2.5rem;
                    padding-top: 5rem;
                    padding-bottom: 5rem;
                }
                .hero-title {
                    margin-top: 1rem;
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: var(--brand-navy);
                }
                .hero-copy {
                    margin-top: 1rem;
                    max-width: 36rem;
                    font-size: 1.125rem;
                }
                .strong {
                    font-weight: 600;
                }
                .hero-actions, .button-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .stat-row {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.75rem;
                    margin-top: 2rem;
                    max-width: 28rem;
                }
                .hero-photo {
                    aspect-ratio: 4 / 5;
                    width: 100%;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    border: 1px solid #e6dcc6;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .hero-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-photo-placeholder {
                    display: flex;
                    width: 100%;
                    height: 100%;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.875rem;
                    font-weight: 600;
                    color: var(--brand-navy);
                    background: linear-gradient(180deg, var(--brand-cream), #ffffff);
                }
                .pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 9999px;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    background: rgba(248, 243, 231, 0.8);
                    border: 1px solid var(--brand-gold);
                }
                .pill-icon {
                    color: var(--brand-gold);
                }
                .stat {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    border-radius: 1rem;
                    border: 1px solid #e6dcc6;
                    padding: 1.5rem;
                }
                .stat-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                    font-variant-numeric: tabular-nums;
                    color: var(--brand-navy);
                }
                .stat-label {
                    margin-top: 0.25rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.025em;
                }
                .site-section {
                    width: 100%;
                    padding: 5rem 0;
                }
                .section-eyebrow {
                    margin-bottom: 0.75rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: var(--brand-gold);
                }
                .section-title {
                    font-size: 1.875rem;
                    font-weight: 600;
                    color: var(--brand-navy);
                }
                .section-subtitle {
                    margin-top: 0.75rem;
                    max-width: 42rem;
                }
                .section-body {
                    margin-top: 2.5rem;
                }
                .grid-3, .grid-2, .media-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }
                .grid-2.tight {
                    grid-template-columns: repeat(2, 1fr);
                    gap: 0.75rem;
                }
                .card {
                    border-radius: 1rem;
                    border: 1px solid #e6dcc6;
                    background: #fffef9;
                    padding: 1.5rem;
                    font-size: 0.875rem;
                }
                .card-title {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.125rem;
                    color: var(--brand-navy);
                    margin: 0 0 1rem;
                }
                .card-content > * + * {
                    margin-top: 0.75rem;
                }
                .bullet-list {
                    list-style: disc inside;
                }
                .plain-list li + li, .bullet-list li + li {
                    margin-top: 0.5rem;
                }
                .why-join {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                    font-weight: 500;
                }
                .why-join-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.75rem;
                    background: var(--brand-gold);
                }
                .episode-art, .video-thumb {
                    aspect-ratio: 16 / 9;
                    width: 100%;
                    overflow: hidden;
                    border-radius: 0.75rem;
                    background: #e9e1cc;
                }
                .video-thumb {
                    border: 1px solid #e6dcc6;
                }
                .video-thumb img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .video-thumb-placeholder {
                    display: flex;
                    width: 100%;
                    height: 100%;
                    align-items: center;
                    justify-content: center;
                    color: var(--brand-gold-dark);
                }
                .video-watch {
                    width: 100%;
                }
                .video-modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.7);
                }
                .video-modal {
                    position: relative;
                    width: 100%;
                    max-width: 64rem;
                }
                .video-modal-close {
                    position: absolute;
                    top: -2.5rem;
                    right: 0;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.875rem;
                    cursor: pointer;
                    background: var(--brand-cream);
                    color: var(--brand-navy);
                }
                .video-frame {
                    aspect-ratio: 16 / 9;
                    width: 100%;
                    overflow: hidden;
                    border-radius: 1rem;
                    background: #000;
                }
                .video-frame iframe {
                    width: 100%;
                    height: 100%;
                    border: 0;
                }
                .journal-cover {
                    overflow: hidden;
                    border-radius: 0.75rem;
                    border: 1px solid #e6dcc6;
                }
                .journal-cover img {
                    width: 100%;
                    height: auto;
                    display: block;
                }
                .subheading {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: var(--brand-navy);
                }
                .small {
                    font-size: 0.875rem;
                }
                .underline {
                    text-decoration: underline !important;
                }
                .contact-form label {
                    display: block;
                    font-weight: 500;
                    color: var(--brand-navy);
                }
                .contact-form input, .contact-form textarea {
                    width: 100%;
                    border-radius: 0.75rem;
                    border: 1px solid #e6dcc6;
                    background: #fff;
                    padding: 0.75rem;
                    color: var(--brand-gray);
                    box-sizing: border-box;
                }
                .form-note {
                    font-size: 0.75rem;
                    color: #8b846f;
                }
                .contact-links > * + * {
                    margin-top: 1rem;
                }
                .contact-line {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .site-footer {
                    border-top: 1px solid #e6dcc6;
                    padding: 2.5rem 0;
                    font-size: 0.875rem;
                    background: #fffef9;
                }
                .footer-inner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .footer-links {
                    display: flex;
                    gap: 1rem;
                }
                @media (min-width: 768px) {
                    .header-nav {
                        display: flex;
                    }
                    .hero-grid, .grid-2 {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .hero-grid {
                        padding-top: 7rem;
                        padding-bottom: 7rem;
                    }
                    .hero-title {
                        font-size: 3.75rem;
                    }
                    .section-title {
                        font-size: 3rem;
                    }
                    .grid-3, .media-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .site-section {
                        padding: 7rem 0;
                    }
                    .footer-inner {
                        flex-direction: row;
                    }
                }
                "#}
            </style>
        </div>
    }
}
