//! Static Marketing Content
//!
//! Rendered identically for every visitor, whatever the authentication state.

/// Product name shown in the navigation bar and document title
pub const PRODUCT_NAME: &str = "MediNotes Pro";

/// Route of the authenticated application surface (served elsewhere)
pub const APP_ROUTE: &str = "/product";

/// Hero headline, one entry per line
pub const HERO_TITLE: [&str; 2] = ["Transform Your", "Consultation Notes"];

pub const HERO_TAGLINE: &str = "AI-powered assistant that generates professional summaries, \
     action items, and patient communications from your consultation notes";

/// One feature card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    /// Gradient accent behind the card
    pub accent: Accent,
}

/// Card accent colour pairs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
}

impl Accent {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Blue => "accent-blue",
            Self::Green => "accent-green",
            Self::Purple => "accent-purple",
        }
    }
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "📋",
        title: "Professional Summaries",
        blurb: "Generate comprehensive medical record summaries from your notes",
        accent: Accent::Blue,
    },
    Feature {
        icon: "✅",
        title: "Action Items",
        blurb: "Clear next steps and follow-up actions for every consultation",
        accent: Accent::Green,
    },
    Feature {
        icon: "📧",
        title: "Patient Emails",
        blurb: "Draft clear, patient-friendly email communications automatically",
        accent: Accent::Purple,
    },
];

/// Billing interval
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingInterval {
    Monthly,
    Yearly,
}

impl BillingInterval {
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Monthly => "/month",
            Self::Yearly => "/year",
        }
    }
}

/// Pricing blurb
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pricing {
    pub name: &'static str,
    pub cents: u32,
    pub interval: BillingInterval,
    pub included: [&'static str; 3],
}

impl Pricing {
    /// Price without the interval, e.g. `$10` or `$12.50`
    pub fn amount(&self) -> String {
        let dollars = self.cents / 100;
        match self.cents % 100 {
            0 => format!("${dollars}"),
            cents => format!("${dollars}.{cents:02}"),
        }
    }

    /// Price with the interval, e.g. `$10/month`
    pub fn display(&self) -> String {
        format!("{}{}", self.amount(), self.interval.suffix())
    }
}

pub const PRICING: Pricing = Pricing {
    name: "Premium Subscription",
    cents: 1000,
    interval: BillingInterval::Monthly,
    included: [
        FEATURES[0].title,
        FEATURES[1].title,
        FEATURES[2].title,
    ],
};

/// Every text fragment that must appear in a rendered landing page
pub fn required_fragments() -> Vec<String> {
    let mut fragments: Vec<String> = vec![PRODUCT_NAME.into(), HERO_TAGLINE.into()];
    fragments.extend(HERO_TITLE.iter().map(|line| (*line).to_string()));
    for feature in FEATURES {
        fragments.push(feature.title.into());
        fragments.push(feature.blurb.into());
    }
    fragments.push(PRICING.name.into());
    fragments.push(PRICING.amount());
    fragments.push(PRICING.interval.suffix().into());
    fragments
}
