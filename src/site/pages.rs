//! Page metadata for each route of the site.

use super::descriptor::{CardKind, PageDescriptor, SocialPreview};

pub const CONTACT: PageDescriptor = PageDescriptor {
    title: "Contact — TimeMeaning",
    description: "Get in touch with the TimeMeaning team about timezone resolution, API access, or press enquiries.",
    social: Some(SocialPreview {
        kind: CardKind::Summary,
        title: "Contact TimeMeaning",
        description: "Questions about timezone resolution or the API? Get in touch.",
    }),
    canonical_url: None,
};

pub const PRIVACY: PageDescriptor = PageDescriptor {
    title: "Privacy Policy — TimeMeaning",
    description: "How TimeMeaning handles your data: no account required, no tracking cookies, and minimal request logs.",
    social: Some(SocialPreview {
        kind: CardKind::Summary,
        title: "TimeMeaning Privacy Policy",
        description: "No account required, no tracking cookies, minimal request logs.",
    }),
    canonical_url: None,
};

pub const STATS: PageDescriptor = PageDescriptor {
    title: "Your Timezone Wrapped — TimeMeaning",
    description: "See how the world reads ambiguous times: the most-confused abbreviations, the busiest conversions, and the DST transitions that caught people out.",
    social: Some(SocialPreview {
        kind: CardKind::SummaryLargeImage,
        title: "Your Timezone Wrapped",
        description: "The most-confused abbreviations, busiest conversions, and DST surprises on TimeMeaning.",
    }),
    canonical_url: Some("https://timemeaning.com/stats"),
};

pub const TOOLS: PageDescriptor = PageDescriptor {
    title: "Free Timezone Tools — TimeMeaning",
    description: "Free timezone tools: audit a message for ambiguous times, price a meeting across timezones, find DST overlaps, and calculate your Unix birthday.",
    social: Some(SocialPreview {
        kind: CardKind::SummaryLargeImage,
        title: "Free Timezone Tools",
        description: "Ambiguity audit, meeting cost calculator, DST overlap finder, and Unix birthday calculator.",
    }),
    canonical_url: Some("https://timemeaning.com/tools"),
};

// The card description is cut down from the page description to fit unfurl previews.
pub const UNIX_BIRTHDAY: PageDescriptor = PageDescriptor {
    title: "Unix Birthday Calculator — TimeMeaning",
    description: "Find the exact moment you turned one billion seconds old, plus your upcoming Unix timestamp milestones, in any timezone.",
    social: Some(SocialPreview {
        kind: CardKind::Summary,
        title: "Unix Birthday Calculator",
        description: "Find the exact moment you turned one billion seconds old.",
    }),
    canonical_url: None,
};
