//! Fixed homepage content.
//!
//! The feature list, the tagline word cycle and the call-to-action are baked
//! into the binary; nothing here changes at runtime. Display order is the
//! order of [`FEATURES`].

use std::borrow::Cow;
use std::time::Duration;

use crate::types::{CallToAction, Cursor, Feature, Illustration, TypewriterConfig};

/// Onboarding illustration (`assets/img/onboarding.svg`)
pub const ONBOARDING_SVG: Illustration = Illustration {
    asset: "assets/img/onboarding.svg",
    view_box: "0 0 200 200",
    body: include_str!("../assets/img/onboarding.svg"),
};

/// Hiring illustration (`assets/img/hiring.svg`)
pub const HIRING_SVG: Illustration = Illustration {
    asset: "assets/img/hiring.svg",
    view_box: "0 0 200 200",
    body: include_str!("../assets/img/hiring.svg"),
};

/// Web technologies illustration (`assets/img/web.svg`)
pub const WEB_SVG: Illustration = Illustration {
    asset: "assets/img/web.svg",
    view_box: "0 0 200 200",
    body: include_str!("../assets/img/web.svg"),
};

/// Features shown on the homepage, left to right.
pub const FEATURES: &[Feature] = &[
    Feature {
        title: Cow::Borrowed("Seamless Onboarding"),
        illustration: ONBOARDING_SVG,
        description: Cow::Borrowed(
            "Ease Recruit is built to ensure effortless setup and integration, allowing you to \
             streamline your recruitment process and get your platform operational in no time.",
        ),
    },
    Feature {
        title: Cow::Borrowed("Focus on Hiring"),
        illustration: HIRING_SVG,
        description: Cow::Borrowed(
            "Ease Recruit lets you concentrate on finding the best talent, while we handle the \
             backend logistics. Simply organize your job postings and applications with ease.",
        ),
    },
    Feature {
        title: Cow::Borrowed("Powered by Modern Web Technologies"),
        illustration: WEB_SVG,
        description: Cow::Borrowed(
            "Leverage the flexibility of React to extend and personalize your \
             recruitment platform. Ease Recruit allows you to modify layouts while keeping a \
             consistent experience with reusable components.",
        ),
    },
];

/// Words cycled after the tagline.
pub const TAGLINE_WORDS: [&str; 4] = [
    "Talent 💫",
    "Opportunity 🏆",
    "Future 🚀",
    "Success 🎉",
];

/// Full passes over [`TAGLINE_WORDS`] before the cycle stops.
pub const TAGLINE_LOOPS: u32 = 5;

/// Time per typed character.
pub const TYPE_SPEED: Duration = Duration::from_millis(100);
/// Time per deleted character.
pub const DELETE_SPEED: Duration = Duration::from_millis(100);
/// Hold time on a fully typed word.
pub const HOLD_DELAY: Duration = Duration::from_millis(1000);

/// The tutorial link under the hero.
pub const CALL_TO_ACTION: CallToAction = CallToAction {
    label: "Ease Recruit Tutorial",
    href: "/docs/intro",
};

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            words: TAGLINE_WORDS.iter().map(|w| w.to_string()).collect(),
            loops: TAGLINE_LOOPS,
            cursor: Cursor::default(),
            type_speed: TYPE_SPEED,
            delete_speed: DELETE_SPEED,
            delay: HOLD_DELAY,
        }
    }
}
