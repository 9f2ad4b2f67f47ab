use yew::prelude::*;

use crate::components::countdown::CountdownTimer;
use crate::components::quiz::AssessmentQuiz;
use crate::components::signup::EmailSignupForm;

const LAUNCH_DATE: &str = "2026-03-31T09:00:00-04:00";

const EXPECT_CARDS: [(&str, &str, &str); 3] = [
    (
        "🎙",
        "For Comms Leaders",
        "AI implementation strategies, team workflow frameworks, and real case \
         studies from Fortune 500 communications teams navigating the shift.",
    ),
    (
        "📊",
        "For Executives",
        "Strategic insights on how AI is reshaping internal communications. The \
         perspective shifts your team needs but can't articulate yet.",
    ),
    (
        "🛠",
        "For Practitioners",
        "The Micro-Arc Framework, Voice Note Blueprint, and practical tools you \
         can use Monday morning to produce better content faster.",
    ),
];

const PERKS: [(&str, &str, &str); 4] = [
    (
        "⚡",
        "Early Episode Access",
        "Get every episode 48 hours before public release. Be the first to \
         apply insights to your team.",
    ),
    (
        "🔒",
        "Exclusive Bonus Content",
        "Extended interviews, framework deep-dives, and behind-the-scenes \
         content only founding members receive.",
    ),
    (
        "💬",
        "Direct Access",
        "Shape the show's direction. Submit questions, suggest guests, and get \
         responses directly from Vernon.",
    ),
    (
        "📋",
        "AI Readiness Assessment",
        "Take the assessment today and get a personal profile with the episodes \
         and frameworks to start from.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
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

    html! {
        <main class="landing">
            // Hero
            <section class="hero" id="signup">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        {"Coming March 2026"}
                    </div>
                    <h1>
                        {"STORIES"}<br/>
                        <em>{"THAT"}</em><br/>
                        {"LEAD"}
                    </h1>
                    <p class="hero-tagline">{"Not Conflict. Revelation."}</p>
                    <p class="hero-copy">
                        {"A podcast for communications leaders who are being asked to do \
                          more with AI — and need a framework, not a firehose."}
                    </p>
                    <EmailSignupForm
                        variant={"hero".to_string()}
                        button_text={"Get Insider Access".to_string()}
                    />
                </div>
            </section>

            // Countdown
            <section class="countdown-section">
                <p class="section-kicker">{"Launching In"}</p>
                <CountdownTimer target_date={LAUNCH_DATE.to_string()} />
                <p class="countdown-note">
                    {"Join the founding members list for early episode access, exclusive \
                      content, and behind-the-scenes updates."}
                </p>
            </section>

            // Problem statement
            <section class="problem-section">
                <h2>
                    {"Your team is being asked to do more with AI."}<br/>
                    <em>{"You need a framework, not a firehose."}</em>
                </h2>
                <p>
                    {"Every week, there's a new AI tool, a new mandate from leadership, \
                      and a team looking to you for direction. Most podcast content gives \
                      you hype. Stories That Lead gives you the strategic thinking and \
                      real-world frameworks that Fortune 500 communications leaders \
                      actually use."}
                </p>
            </section>

            // What to expect
            <section class="expect-section">
                <h2>{"What to Expect"}</h2>
                <p class="section-sub">{"Select your path. Every episode delivers something different."}</p>
                <div class="card-grid">
                    {
                        EXPECT_CARDS.iter().map(|(icon, title, description)| html! {
                            <div class="card" key={*title}>
                                <div class="card-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            // Lead magnet: the assessment
            <section class="assessment-section" id="assessment">
                <div class="assessment-panel">
                    <div class="assessment-intro">
                        <div class="assessment-badge">{"FREE RESOURCE"}</div>
                        <h2>
                            {"AI Readiness Assessment"}<br/>
                            <em>{"for Communications Teams"}</em>
                        </h2>
                        <p>
                            {"Where does your team stand on AI adoption? Answer five \
                              questions to find your communicator profile, the gaps to \
                              close first, and the episodes to start with."}
                        </p>
                        <div class="assessment-alt">
                            <p class="assessment-alt-note">
                                {"Prefer to skip the quiz? Get the checklist straight to your inbox."}
                            </p>
                            <EmailSignupForm
                                variant={"lead-magnet".to_string()}
                                button_text={"Send Me the Checklist".to_string()}
                            />
                        </div>
                    </div>
                    <div class="assessment-widget">
                        <AssessmentQuiz />
                    </div>
                </div>
            </section>

            // Founding member perks
            <section class="perks-section">
                <h2>{"Founding Member "}<em>{"Perks"}</em></h2>
                <p class="section-sub">{"Join before launch and get access others won't."}</p>
                <div class="card-grid perks-grid">
                    {
                        PERKS.iter().map(|(icon, title, description)| html! {
                            <div class="card" key={*title}>
                                <div class="card-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            // Bottom CTA
            <section class="bottom-cta" id="join">
                <h2>{"Don't miss the first episode."}</h2>
                <p>
                    {"Join the founding members list and be part of the launch. You'll \
                      get early access, exclusive content, and your assessment results — \
                      immediately."}
                </p>
                <EmailSignupForm
                    variant={"bottom".to_string()}
                    button_text={"Join the Founding Members".to_string()}
                />
            </section>

            // Footer
            <footer class="landing-footer">
                <div class="footer-brand">
                    <span class="nav-dot"></span>
                    <span>{"STORIES THAT "}<em>{"LEAD"}</em></span>
                    <span class="footer-tagline">{"— Not Conflict. Revelation."}</span>
                </div>
                <div class="footer-links">
                    <a href="https://vernonross.com" target="_blank" rel="noopener noreferrer">
                        {"VernonRoss.com"}
                    </a>
                    <span>{"|"}</span>
                    <a href="https://www.linkedin.com/in/vernonross/" target="_blank" rel="noopener noreferrer">
                        {"LinkedIn"}
                    </a>
                </div>
                <div class="footer-copyright">
                    {"© 2026 Vernon Ross. All rights reserved."}
                </div>
            </footer>

            <style>
                {r#"
                    :root {
                        --navy-dark: #0a1128;
                        --navy: #13214a;
                        --navy-light: #2a3a6b;
                        --gold: #d4af37;
                        --gold-light: #e6c65c;
                        --text: #ffffff;
                        --text-muted: #9aa3b8;
                    }

                    body {
                        margin: 0;
                        background: var(--navy-dark);
                        color: var(--text);
                        font-family: 'Inter', -apple-system, sans-serif;
                    }

                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        background: rgba(10, 17, 40, 0.9);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(42, 58, 107, 0.3);
                        transition: background 0.2s ease;
                    }

                    .top-nav.scrolled {
                        background: rgba(10, 17, 40, 0.98);
                    }

                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: var(--text);
                        font-weight: 700;
                        letter-spacing: -0.02em;
                        text-decoration: none;
                    }

                    .nav-logo em, .footer-brand em, .landing h1 em, .landing h2 em {
                        color: var(--gold);
                        font-style: normal;
                    }

                    .nav-dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        background: var(--gold);
                    }

                    .nav-cta {
                        padding: 0.5rem 1.25rem;
                        background: rgba(212, 175, 55, 0.1);
                        border: 1px solid rgba(212, 175, 55, 0.3);
                        border-radius: 8px;
                        color: var(--gold);
                        font-size: 0.875rem;
                        font-weight: 600;
                        text-decoration: none;
                    }

                    .nav-cta:hover {
                        background: rgba(212, 175, 55, 0.2);
                    }

                    section {
                        padding: 6rem 1.5rem;
                    }

                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        background: radial-gradient(ellipse at top right, var(--navy-light) 0%, transparent 60%), var(--navy-dark);
                    }

                    .hero-content {
                        max-width: 640px;
                    }

                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.375rem 1rem;
                        background: rgba(212, 175, 55, 0.1);
                        border: 1px solid rgba(212, 175, 55, 0.2);
                        border-radius: 999px;
                        color: var(--gold);
                        font-size: 0.875rem;
                        margin-bottom: 1.5rem;
                    }

                    .hero-badge-dot {
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        background: var(--gold);
                        animation: pulse 2s infinite;
                    }

                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.4; }
                    }

                    .landing h1 {
                        font-size: clamp(3rem, 8vw, 4.5rem);
                        font-weight: 700;
                        letter-spacing: -0.02em;
                        line-height: 1.1;
                        margin: 0;
                    }

                    .hero-tagline {
                        color: var(--text-muted);
                        text-transform: uppercase;
                        letter-spacing: 0.25em;
                        font-size: 0.875rem;
                        margin-top: 1.5rem;
                    }

                    .hero-copy {
                        color: #cdd3e1;
                        font-size: 1.125rem;
                        line-height: 1.6;
                        margin: 1.5rem auto 2rem;
                        max-width: 480px;
                    }

                    .signup-form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        max-width: 420px;
                        margin: 0 auto;
                    }

                    .signup-form input {
                        padding: 0.75rem 1rem;
                        background: rgba(42, 58, 107, 0.6);
                        border: 1px solid var(--navy-light);
                        border-radius: 8px;
                        color: var(--text);
                        font-size: 1rem;
                    }

                    .signup-form input:focus {
                        outline: none;
                        border-color: var(--gold);
                    }

                    .signup-form button, .quiz-start {
                        padding: 0.75rem 1.5rem;
                        background: var(--gold);
                        border: none;
                        border-radius: 8px;
                        color: var(--navy-dark);
                        font-size: 1rem;
                        font-weight: 700;
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }

                    .signup-form button:hover, .quiz-start:hover {
                        background: var(--gold-light);
                    }

                    .signup-form button:disabled {
                        opacity: 0.6;
                        cursor: default;
                    }

                    .signup-error, .quiz-error {
                        color: #f87171;
                        font-size: 0.875rem;
                        text-align: center;
                        margin: 0;
                    }

                    .signup-privacy {
                        color: #6b7280;
                        font-size: 0.75rem;
                        text-align: center;
                        margin: 0;
                    }

                    .signup-success {
                        max-width: 420px;
                        margin: 0 auto;
                        padding: 1.5rem;
                        background: rgba(212, 175, 55, 0.1);
                        border: 1px solid rgba(212, 175, 55, 0.3);
                        border-radius: 12px;
                        text-align: center;
                    }

                    .signup-success-check {
                        color: var(--gold);
                        font-size: 1.5rem;
                    }

                    .signup-success-title {
                        color: var(--gold);
                        font-weight: 600;
                        font-size: 1.125rem;
                        margin: 0.5rem 0 0.25rem;
                    }

                    .signup-success-note {
                        color: #cdd3e1;
                        font-size: 0.875rem;
                        margin: 0;
                    }

                    .countdown-section {
                        background: var(--navy);
                        border-top: 1px solid rgba(42, 58, 107, 0.2);
                        border-bottom: 1px solid rgba(42, 58, 107, 0.2);
                        text-align: center;
                        padding: 4rem 1.5rem;
                    }

                    .section-kicker {
                        color: var(--text-muted);
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-size: 0.875rem;
                        margin-bottom: 1.5rem;
                    }

                    .countdown {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                    }

                    .countdown-unit {
                        text-align: center;
                    }

                    .countdown-value {
                        width: 80px;
                        height: 80px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(42, 58, 107, 0.5);
                        border: 1px solid var(--navy-light);
                        border-radius: 8px;
                        color: var(--gold);
                        font-size: 1.875rem;
                        font-weight: 700;
                    }

                    .countdown-label {
                        display: block;
                        margin-top: 0.5rem;
                        color: var(--text-muted);
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }

                    .countdown-note {
                        color: var(--text-muted);
                        font-size: 0.875rem;
                        max-width: 420px;
                        margin: 2rem auto 0;
                    }

                    .problem-section, .expect-section, .perks-section, .bottom-cta {
                        text-align: center;
                    }

                    .landing h2 {
                        font-size: clamp(1.75rem, 4vw, 2.5rem);
                        font-weight: 700;
                        line-height: 1.25;
                        margin: 0;
                    }

                    .problem-section p, .bottom-cta p {
                        color: #cdd3e1;
                        font-size: 1.125rem;
                        line-height: 1.6;
                        max-width: 640px;
                        margin: 2rem auto;
                    }

                    .section-sub {
                        color: var(--text-muted);
                        font-size: 1.125rem;
                        margin: 1rem 0 0;
                    }

                    .expect-section {
                        background: var(--navy);
                    }

                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                        max-width: 1000px;
                        margin: 3rem auto 0;
                        text-align: left;
                    }

                    .card {
                        background: rgba(10, 17, 40, 0.5);
                        border: 1px solid rgba(42, 58, 107, 0.2);
                        border-radius: 12px;
                        padding: 2rem;
                        transition: border-color 0.2s ease;
                    }

                    .card:hover {
                        border-color: rgba(212, 175, 55, 0.3);
                    }

                    .card-icon {
                        font-size: 2rem;
                        margin-bottom: 1rem;
                    }

                    .card h3 {
                        margin: 0 0 0.75rem;
                        font-size: 1.25rem;
                    }

                    .card p {
                        color: var(--text-muted);
                        font-size: 0.875rem;
                        line-height: 1.6;
                        margin: 0;
                    }

                    .assessment-panel {
                        max-width: 1000px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 2.5rem;
                        background: linear-gradient(135deg, var(--navy), rgba(42, 58, 107, 0.2));
                        border: 1px solid rgba(42, 58, 107, 0.3);
                        border-radius: 16px;
                        padding: 3rem;
                    }

                    .assessment-badge {
                        display: inline-block;
                        padding: 0.25rem 0.75rem;
                        background: rgba(212, 175, 55, 0.1);
                        border: 1px solid rgba(212, 175, 55, 0.2);
                        border-radius: 999px;
                        color: var(--gold);
                        font-size: 0.75rem;
                        margin-bottom: 1rem;
                    }

                    .assessment-intro p {
                        color: #cdd3e1;
                        line-height: 1.6;
                    }

                    .assessment-alt {
                        margin-top: 2rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(42, 58, 107, 0.3);
                    }

                    .assessment-alt .signup-form {
                        margin: 0;
                    }

                    .assessment-alt-note {
                        color: var(--text-muted);
                        font-size: 0.875rem;
                    }

                    .assessment-widget {
                        background: rgba(10, 17, 40, 0.6);
                        border: 1px solid rgba(42, 58, 107, 0.2);
                        border-radius: 12px;
                        padding: 1.5rem;
                    }

                    .quiz h3 {
                        margin: 0 0 1rem;
                    }

                    .quiz-intro p, .quiz-email p {
                        color: var(--text-muted);
                        font-size: 0.9rem;
                        line-height: 1.6;
                    }

                    .quiz-progress {
                        color: var(--gold);
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin: 0 0 0.75rem;
                    }

                    .quiz-options {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }

                    .quiz-option {
                        padding: 0.75rem 1rem;
                        background: rgba(42, 58, 107, 0.4);
                        border: 1px solid var(--navy-light);
                        border-radius: 8px;
                        color: var(--text);
                        font-size: 0.9rem;
                        text-align: left;
                        cursor: pointer;
                        transition: border-color 0.15s ease, background 0.15s ease;
                    }

                    .quiz-option:hover {
                        border-color: rgba(212, 175, 55, 0.5);
                    }

                    .quiz-option.selected {
                        background: rgba(212, 175, 55, 0.2);
                        border-color: var(--gold);
                    }

                    .quiz-email form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }

                    .quiz-email input {
                        padding: 0.75rem 1rem;
                        background: rgba(42, 58, 107, 0.6);
                        border: 1px solid var(--navy-light);
                        border-radius: 8px;
                        color: var(--text);
                    }

                    .quiz-email button {
                        padding: 0.75rem 1.5rem;
                        background: var(--gold);
                        border: none;
                        border-radius: 8px;
                        color: var(--navy-dark);
                        font-weight: 700;
                        cursor: pointer;
                    }

                    .quiz-email button:disabled {
                        opacity: 0.6;
                    }

                    .quiz-results {
                        text-align: center;
                    }

                    .quiz-result-emoji {
                        font-size: 2.5rem;
                    }

                    .quiz-result-kicker {
                        color: var(--text-muted);
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-size: 0.75rem;
                        margin: 0.5rem 0 0;
                    }

                    .quiz-result-description {
                        color: #cdd3e1;
                        line-height: 1.6;
                    }

                    .quiz-recommendations {
                        text-align: left;
                        color: var(--text-muted);
                        font-size: 0.9rem;
                        line-height: 1.8;
                        padding-left: 1.25rem;
                    }

                    .quiz-result-cta {
                        color: var(--gold);
                        font-weight: 600;
                    }

                    .bottom-cta {
                        background: linear-gradient(to bottom, var(--navy), var(--navy-dark));
                    }

                    .landing-footer {
                        padding: 3rem 1.5rem;
                        border-top: 1px solid rgba(42, 58, 107, 0.2);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                    }

                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-weight: 700;
                        font-size: 0.875rem;
                    }

                    .footer-tagline {
                        color: #6b7280;
                        font-weight: 400;
                        font-size: 0.75rem;
                    }

                    .footer-links {
                        display: flex;
                        gap: 1.5rem;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }

                    .footer-links a {
                        color: #6b7280;
                        text-decoration: none;
                    }

                    .footer-links a:hover {
                        color: var(--gold);
                    }

                    .footer-copyright {
                        color: #4b5563;
                        font-size: 0.75rem;
                    }
                "#}
            </style>
        </main>
    }
}
