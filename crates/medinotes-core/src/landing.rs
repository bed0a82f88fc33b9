//! Landing View Contract
//!
//! Maps the authentication signal onto the controls the landing page shows.
//! Every render goes through the single exhaustive `match` in
//! [`LandingActions::for_state`], so no state can show both the sign-in
//! trigger and the product link.

use std::fmt;

use crate::auth::AuthState;
use crate::content::{self, APP_ROUTE};
use crate::error::ConsistencyError;

/// Attribute carried by both action slots, naming the rendered branch
pub const BRANCH_ATTR: &str = "data-auth-branch";

/// Attribute naming a delegated control
pub const CONTROL_ATTR: &str = "data-control";

pub const SIGN_IN_CONTROL: &str = "sign-in";
pub const ACCOUNT_CONTROL: &str = "account";

/// Render branch selected from the authentication signal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Branch {
    Loading,
    Anonymous,
    Authenticated,
    Unavailable,
}

impl Branch {
    pub const ALL: [Self; 4] = [
        Self::Loading,
        Self::Anonymous,
        Self::Authenticated,
        Self::Unavailable,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Anonymous => "anonymous",
            Self::Authenticated => "authenticated",
            Self::Unavailable => "unavailable",
        }
    }

    /// The attribute as it appears in rendered markup
    pub fn marker(self) -> String {
        format!(r#"{BRANCH_ATTR}="{}""#, self.as_str())
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&AuthState> for Branch {
    fn from(state: &AuthState) -> Self {
        match state {
            AuthState::Loading => Self::Loading,
            AuthState::Anonymous => Self::Anonymous,
            AuthState::Authenticated(_) => Self::Authenticated,
            AuthState::Unavailable { .. } => Self::Unavailable,
        }
    }
}

/// What one action slot renders
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Button that opens the provider's modal sign-in flow
    SignIn { label: &'static str },

    /// Link to the application surface
    OpenApp {
        href: &'static str,
        label: &'static str,
    },

    /// Placeholder while the provider initializes
    Pending,

    /// Disabled notice when the provider failed to load
    Unavailable { message: &'static str },
}

impl Action {
    pub const fn label(&self) -> Option<&'static str> {
        match self {
            Self::SignIn { label } | Self::OpenApp { label, .. } => Some(label),
            Self::Unavailable { message } => Some(message),
            Self::Pending => None,
        }
    }
}

pub const UNAVAILABLE_MESSAGE: &str = "Sign-in unavailable";

/// Both action slots plus the account control, for one render
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandingActions {
    pub branch: Branch,
    /// Navigation bar slot
    pub nav: Action,
    /// Main call to action below the pricing card
    pub cta: Action,
    /// Whether the provider's account control is mounted
    pub show_account: bool,
}

impl LandingActions {
    pub fn for_state(state: &AuthState) -> Self {
        let branch = Branch::from(state);
        match state {
            AuthState::Anonymous => Self {
                branch,
                nav: Action::SignIn { label: "Sign In" },
                cta: Action::SignIn {
                    label: "Start Free Trial",
                },
                show_account: false,
            },
            AuthState::Authenticated(_) => Self {
                branch,
                nav: Action::OpenApp {
                    href: APP_ROUTE,
                    label: "Go to App",
                },
                cta: Action::OpenApp {
                    href: APP_ROUTE,
                    label: "Open Consultation Assistant",
                },
                show_account: true,
            },
            AuthState::Loading => Self {
                branch,
                nav: Action::Pending,
                cta: Action::Pending,
                show_account: false,
            },
            AuthState::Unavailable { .. } => Self {
                branch,
                nav: Action::Unavailable {
                    message: UNAVAILABLE_MESSAGE,
                },
                cta: Action::Unavailable {
                    message: UNAVAILABLE_MESSAGE,
                },
                show_account: false,
            },
        }
    }

    pub const fn offers_sign_in(&self) -> bool {
        matches!(self.nav, Action::SignIn { .. })
    }

    pub const fn links_to_app(&self) -> bool {
        matches!(self.nav, Action::OpenApp { .. })
    }
}

fn control_marker(control: &str) -> String {
    format!(r#"{CONTROL_ATTR}="{control}""#)
}

/// Check a rendered landing document against the branch contract
///
/// # Errors
///
/// Returns the first [`ConsistencyError`] found.
pub fn verify_document(html: &str, state: &AuthState) -> Result<(), ConsistencyError> {
    let expected = Branch::from(state);
    let actions = LandingActions::for_state(state);

    let found = html.matches(&expected.marker()).count();
    if found != 2 {
        return Err(ConsistencyError::MissingBranch { expected, found });
    }
    if let Some(unexpected) = Branch::ALL
        .into_iter()
        .filter(|branch| *branch != expected)
        .find(|branch| html.contains(&branch.marker()))
    {
        return Err(ConsistencyError::ForeignBranch {
            expected,
            unexpected,
        });
    }

    let app_link = format!(r#"href="{APP_ROUTE}""#);
    let controls = [
        ("sign-in trigger", html.contains(&control_marker(SIGN_IN_CONTROL)), actions.offers_sign_in()),
        ("product link", html.contains(&app_link), actions.links_to_app()),
        ("account control", html.contains(&control_marker(ACCOUNT_CONTROL)), actions.show_account),
    ];
    for (control, present, wanted) in controls {
        match (present, wanted) {
            (true, false) => {
                return Err(ConsistencyError::UnexpectedControl {
                    branch: expected,
                    control,
                });
            }
            (false, true) => {
                return Err(ConsistencyError::MissingControl {
                    branch: expected,
                    control,
                });
            }
            _ => {}
        }
    }

    for label in [actions.nav.label(), actions.cta.label()].into_iter().flatten() {
        if !html.contains(label) {
            return Err(ConsistencyError::MissingControl {
                branch: expected,
                control: label,
            });
        }
    }

    if let Some(missing) = content::required_fragments()
        .into_iter()
        .find(|fragment| !html.contains(fragment.as_str()))
    {
        return Err(ConsistencyError::MissingContent(missing));
    }

    Ok(())
}
