// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
mod components;
mod format;
pub mod hooks;
mod screens;

use api::config::AppConfig;
use api::interactions::InteractionStore;
use api::session::AuthStage;
use api::session::MockLatency;
use api::session::SessionStore;
use api::storage;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::toast::Toast;
use screens::choose_cause::ChooseCauseScreen;
use screens::create::CreateScreen;
use screens::follow_people::FollowPeopleScreen;
use screens::forgot_password::ForgotPasswordScreen;
use screens::home::HomeScreen;
use screens::karma::KarmaScreen;
use screens::login::LoginScreen;
use screens::onboarding::OnboardingScreen;
use screens::otp::OtpScreen;
use screens::phone::PhoneScreen;
use screens::profile::ProfileScreen;
use screens::signup::SignupScreen;
use screens::user_profile::UserProfileScreen;
use screens::video_feed::VideoFeedScreen;
use screens::welcome::WelcomeScreen;

/// Enum to represent the different screens in our application.
#[derive(Clone, PartialEq, Default)]
enum Screen {
    #[default]
    Welcome,
    Login,
    Signup,
    Phone,
    ForgotPassword,
    Otp,
    Onboarding,
    ChooseCause,
    FollowPeople,
    Home,
    Videos,
    Create,
    Karma,
    Profile,
    User(String),
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Login => "Log In",
            Screen::Signup => "Sign Up",
            Screen::Phone => "Phone",
            Screen::ForgotPassword => "Forgot Password",
            Screen::Otp => "Verification",
            Screen::Onboarding => "Onboarding",
            Screen::ChooseCause => "Choose a Cause",
            Screen::FollowPeople => "Follow People",
            Screen::Home => "Home",
            Screen::Videos => "Videos",
            Screen::Create => "Create",
            Screen::Karma => "Karma",
            Screen::Profile => "Profile",
            Screen::User(_) => "Creator",
        }
    }

    /// Tab-bar glyph. Empty for screens outside the tab frame.
    fn icon(&self) -> &'static str {
        match self {
            Screen::Home => "🏠",
            Screen::Videos => "🎬",
            Screen::Create => "➕",
            Screen::Karma => "🌟",
            Screen::Profile => "👤",
            _ => "",
        }
    }

    /// Screens that only make sense with a signed-in (or at least
    /// verified) user.
    fn requires_session(&self) -> bool {
        matches!(
            self,
            Screen::Onboarding
                | Screen::ChooseCause
                | Screen::FollowPeople
                | Screen::Home
                | Screen::Videos
                | Screen::Create
                | Screen::Karma
                | Screen::Profile
                | Screen::User(_)
        )
    }

    /// Screens that sit inside the tab frame. These additionally assume
    /// onboarding is finished.
    fn shows_tab_bar(&self) -> bool {
        matches!(
            self,
            Screen::Home
                | Screen::Videos
                | Screen::Create
                | Screen::Karma
                | Screen::Profile
                | Screen::User(_)
        )
    }
}

/// The five tab destinations, in display order.
const TAB_SCREENS: [Screen; 5] = [
    Screen::Home,
    Screen::Videos,
    Screen::Create,
    Screen::Karma,
    Screen::Profile,
];

/// The bottom navigation bar component.
#[component]
fn TabBar(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-bar",
            for screen in TAB_SCREENS {
                a {
                    href: "#",
                    // A creator profile is reached from the feed, so it
                    // keeps the Home tab lit.
                    class: {
                        let is_active = match (&*active_screen.read(), &screen) {
                            (Screen::User(_), Screen::Home) => true,
                            (active, current) => active == current,
                        };
                        if is_active { "tab-item active-tab" } else { "tab-item" }
                    },
                    "aria-current": {
                        let is_active = match (&*active_screen.read(), &screen) {
                            (Screen::User(_), Screen::Home) => true,
                            (active, current) => active == current,
                        };
                        if is_active { "page" } else { "false" }
                    },
                    onclick: move |event| {
                        event.prevent_default();
                        active_screen.set(screen.clone());
                    },
                    span { class: "tab-icon", "{screen.icon()}" }
                    span { class: "tab-label", "{screen.name()}" }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        overflow: hidden;
        background-color: var(--pico-muted-border-color);
    }

    /* --- APP FRAME --- */
    /* One phone-sized column, whatever the window size is. */
    .app-frame {
        position: fixed;
        top: 0;
        bottom: 0;
        left: 50%;
        transform: translateX(-50%);
        width: 100%;
        max-width: 430px;
        display: flex;
        flex-direction: column;
        overflow: hidden;
        background-color: var(--pico-background-color);
    }

    .screen-content {
        flex: 1;
        min-height: 0;
        overflow-y: auto;
        padding: 1rem;
    }

    /* --- TAB BAR --- */
    .tab-bar {
        flex-shrink: 0;
        display: flex;
        justify-content: space-around;
        border-top: 1px solid var(--pico-muted-border-color);
        padding: 0.4rem 0 0.6rem;
        background-color: var(--pico-card-background-color);
    }
    .tab-item {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.1rem;
        font-size: 0.65rem;
        color: var(--pico-muted-color);
        text-decoration: none;
    }
    .tab-item .tab-icon { font-size: 1.3rem; }
    .tab-item.active-tab { color: var(--pico-primary); }

    /* --- AUTH SCREENS --- */
    .auth-screen {
        display: flex;
        flex-direction: column;
        justify-content: center;
        min-height: 100%;
        gap: 1rem;
    }
    .auth-screen.welcome, .auth-screen.onboarding { text-align: center; }
    .brand h1 { font-size: 2.4rem; margin-bottom: 0.25rem; }
    .welcome-actions { display: flex; flex-direction: column; gap: 0.75rem; }
    .fine-print { color: var(--pico-muted-color); font-size: 0.75rem; }
    .auth-links { display: flex; justify-content: space-between; }
    .back-button {
        background: none;
        border: none;
        color: var(--pico-color);
        font-size: 1.3rem;
        width: auto;
        margin: 0;
        padding: 0;
        cursor: pointer;
    }

    /* --- ONBOARDING --- */
    .slide { text-align: center; padding: 2rem 0; }
    .slide-icon { font-size: 4rem; }
    .slide-dots { display: flex; justify-content: center; gap: 0.5rem; margin: 1rem 0; }
    .dot {
        width: 8px;
        height: 8px;
        border-radius: 50%;
        background-color: var(--pico-muted-border-color);
    }
    .dot.active { background-color: var(--pico-primary); }

    .cause-list { display: flex; flex-direction: column; gap: 0.5rem; }
    .cause-card { margin: 0; padding: 0.9rem 1rem; cursor: pointer; }
    .cause-card.selected { border: 2px solid var(--pico-primary); }
    .cause-icon { font-size: 1.6rem; margin-right: 0.5rem; }
    .cause-title { display: flex; align-items: center; }

    .creator-list { display: flex; flex-direction: column; gap: 0.75rem; }
    .creator-row { display: flex; align-items: center; gap: 0.75rem; }
    .creator-row button { width: auto; margin: 0; padding: 0.3rem 1rem; }
    .creator-info { flex: 1; display: flex; flex-direction: column; }

    /* --- FEED --- */
    .feed-screen { display: flex; flex-direction: column; }
    .feed-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 0.5rem;
        margin-bottom: 0.75rem;
    }
    .feed-header h2 { margin: 0; }
    .karma-chip {
        width: auto;
        margin: 0;
        padding: 0.25rem 0.9rem;
        border-radius: 999px;
        font-size: 0.85rem;
    }

    .post-card { margin-bottom: 1rem; padding: 0.9rem; }
    .post-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 0.6rem;
    }
    .post-author { display: flex; align-items: center; gap: 0.6rem; cursor: pointer; }
    .verified { color: var(--pico-primary); }
    .feel-good-badge {
        font-size: 0.7rem;
        padding: 0.15rem 0.5rem;
        border-radius: 999px;
        border: 1px solid var(--pico-ins-color);
        color: var(--pico-ins-color);
        white-space: nowrap;
    }
    .post-media { width: 100%; border-radius: var(--pico-border-radius); overflow: hidden; }
    .post-media img { display: block; width: 100%; }
    .video-placeholder {
        aspect-ratio: 4 / 5;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 3rem;
        background-color: #111;
        color: #fff;
    }
    .post-actions { display: flex; gap: 1rem; margin-top: 0.6rem; }
    .action {
        background: none;
        border: none;
        width: auto;
        margin: 0;
        padding: 0;
        font-size: 0.95rem;
        color: var(--pico-color);
        cursor: pointer;
    }
    .action.liked { color: #e0245e; }
    .action.supernovaed { color: #f5a623; }
    .action.saved { color: var(--pico-primary); }
    .post-caption { margin: 0.5rem 0 0; }
    .post-hashtags {
        display: flex;
        flex-wrap: wrap;
        gap: 0.4rem;
        color: var(--pico-primary);
        font-size: 0.85rem;
    }

    /* --- VIDEOS --- */
    .video-card { margin-bottom: 1rem; padding: 0; overflow: hidden; }
    .video-overlay { display: flex; align-items: center; gap: 0.6rem; padding: 0.75rem; }

    /* --- CREATE --- */
    .create-options { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; }
    .create-option { margin: 0; text-align: center; padding: 1.25rem 0.5rem; cursor: pointer; }
    .create-icon { font-size: 2.2rem; display: block; }
    .coming-soon { text-align: center; color: var(--pico-muted-color); }

    /* --- KARMA --- */
    .karma-balance { text-align: center; }
    .karma-number { font-size: 3rem; font-weight: 700; display: block; }
    .earn-rules { list-style: none; padding: 0; }
    .earn-rules li { margin-bottom: 0.5rem; }

    /* --- PROFILES --- */
    .profile-head {
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        gap: 0.4rem;
    }
    .stat-row {
        display: flex;
        justify-content: space-around;
        margin: 1rem 0;
        text-align: center;
    }
    .stat strong { display: block; font-size: 1.1rem; }
    .stat small { color: var(--pico-muted-color); }
    .post-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 3px; }
    .post-tile { position: relative; aspect-ratio: 1; }
    .post-tile img { width: 100%; height: 100%; object-fit: cover; display: block; }
    .tile-stat {
        position: absolute;
        right: 4px;
        bottom: 4px;
        font-size: 0.7rem;
        background: rgba(0, 0, 0, 0.55);
        color: #fff;
        padding: 0 0.3rem;
        border-radius: 4px;
    }

    /* --- SHARED WIDGETS --- */
    .avatar { border-radius: 50%; object-fit: cover; flex-shrink: 0; }
    .avatar-initial {
        background-color: var(--pico-primary);
        color: var(--pico-primary-inverse);
        text-align: center;
        font-weight: 700;
    }
    .cause-badge {
        display: inline-block;
        padding: 0.1rem 0.6rem;
        border-radius: 999px;
        font-size: 0.75rem;
    }
    .karma-hint { border: 1px solid var(--pico-primary); margin-bottom: 1rem; }
    .toast {
        position: absolute;
        left: 50%;
        bottom: 4.5rem;
        transform: translateX(-50%);
        background-color: var(--pico-contrast);
        color: var(--pico-contrast-inverse);
        padding: 0.5rem 1.1rem;
        border-radius: 999px;
        white-space: nowrap;
        z-index: 50;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2.0.6/css/pico.cyan.min.css",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Stores are built exactly once per app run. The config is consumed
    // here; nothing else reads the environment.
    let (app_state, session, interactions) = use_hook(|| {
        let config = AppConfig::from_env();
        let store = storage::open_default(&config);
        let latency = MockLatency::from_config(&config);
        let session = SessionStore::load(store.clone(), latency);
        let interactions = InteractionStore::load(store);
        (AppState::new(), session, interactions)
    });

    rsx! {
        LoadedApp {
            app_state,
            session,
            interactions,
        }
    }
}

/// This component holds the main app logic and only runs when the
/// stores are ready.
#[component]
fn LoadedApp(app_state: AppState, session: SessionStore, interactions: InteractionStore) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    // A restored session decides where the app opens.
    let initial_screen = match session.stage() {
        AuthStage::Active => Screen::Home,
        AuthStage::NeedsOnboarding => Screen::Onboarding,
        AuthStage::Anonymous | AuthStage::PendingVerification { .. } => Screen::Welcome,
    };

    // Create signals for mutable state at the top level of the component.
    let session_signal = use_signal(move || session);
    let interactions_signal = use_signal(move || interactions);
    let toast_signal = use_signal(|| None);

    // Provide the mutable state by passing the already created signals.
    use_context_provider(|| AppStateMut {
        session: session_signal,
        interactions: interactions_signal,
        toast: toast_signal,
    });

    let mut active_screen = use_signal(move || initial_screen);

    // --- Provide the active_screen signal to the context ---
    use_context_provider(|| active_screen);

    // Keep the visible screen consistent with the auth stage. Reading
    // the session subscribes this effect; the screen itself is peeked
    // so plain navigation does not re-run it.
    use_effect(move || {
        let stage = session_signal.read().stage().clone();
        let current = active_screen.peek().clone();
        let target = match stage {
            AuthStage::Anonymous | AuthStage::PendingVerification { .. } => {
                current.requires_session().then_some(Screen::Welcome)
            }
            AuthStage::NeedsOnboarding => current.shows_tab_bar().then_some(Screen::Onboarding),
            AuthStage::Active => (!current.requires_session()).then_some(Screen::Home),
        };
        if let Some(target) = target {
            if target != current {
                active_screen.set(target);
            }
        }
    });

    let show_tab_bar = active_screen.read().shows_tab_bar();

    rsx! {
        div {
            class: "app-frame",
            div {
                class: "screen-content",
                match active_screen() {
                    Screen::Welcome => rsx! {
                        WelcomeScreen {}
                    },
                    Screen::Login => rsx! {
                        LoginScreen {}
                    },
                    Screen::Signup => rsx! {
                        SignupScreen {}
                    },
                    Screen::Phone => rsx! {
                        PhoneScreen {}
                    },
                    Screen::ForgotPassword => rsx! {
                        ForgotPasswordScreen {}
                    },
                    Screen::Otp => rsx! {
                        OtpScreen {}
                    },
                    Screen::Onboarding => rsx! {
                        OnboardingScreen {}
                    },
                    Screen::ChooseCause => rsx! {
                        ChooseCauseScreen {}
                    },
                    Screen::FollowPeople => rsx! {
                        FollowPeopleScreen {}
                    },
                    Screen::Home => rsx! {
                        HomeScreen {}
                    },
                    Screen::Videos => rsx! {
                        VideoFeedScreen {}
                    },
                    Screen::Create => rsx! {
                        CreateScreen {}
                    },
                    Screen::Karma => rsx! {
                        KarmaScreen {}
                    },
                    Screen::Profile => rsx! {
                        ProfileScreen {}
                    },
                    Screen::User(user_id) => {
                        // Key the screen on the creator so switching
                        // profiles resets its local state.
                        let key = user_id.clone();
                        rsx! {
                            UserProfileScreen {
                                key: "{key}",
                                user_id,
                            }
                        }
                    }
                }
            }
            if show_tab_bar {
                TabBar {
                    active_screen,
                }
            }
            Toast {}
        }
    }
}
