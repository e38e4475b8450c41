//! Page identifiers for the forum navigation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a page's navigation control lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavGroup {
    /// Header navigation bar (Home, Popular, New Post)
    Header,
    /// "Popular Topics" sidebar
    Sidebar,
}

/// Every page the root shell can show. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Popular,
    New,
    #[serde(rename = "upsvsfedex")]
    UpsVsFedex,
    Packaging,
    Tracking,
    #[serde(rename = "costoptimization")]
    CostOptimization,
    #[serde(rename = "deliverytimes")]
    DeliveryTimes,
}

impl Page {
    /// All pages in navigation order (header first, then sidebar).
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Popular,
        Page::New,
        Page::UpsVsFedex,
        Page::Packaging,
        Page::Tracking,
        Page::CostOptimization,
        Page::DeliveryTimes,
    ];

    /// Stable identifier used on the command line and in config files.
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Popular => "popular",
            Page::New => "new",
            Page::UpsVsFedex => "upsvsfedex",
            Page::Packaging => "packaging",
            Page::Tracking => "tracking",
            Page::CostOptimization => "costoptimization",
            Page::DeliveryTimes => "deliverytimes",
        }
    }

    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.iter().copied().find(|p| p.id() == id)
    }

    /// Label on the navigation control.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Popular => "Popular",
            Page::New => "New Post",
            Page::UpsVsFedex => "UPS vs FedEx",
            Page::Packaging => "Packaging Solutions",
            Page::Tracking => "Tracking Issues",
            Page::CostOptimization => "Cost Optimization",
            Page::DeliveryTimes => "Delivery Times",
        }
    }

    /// Condensed label for narrow terminals.
    pub fn short_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Popular => "Popular",
            Page::New => "New",
            Page::UpsVsFedex => "UPS/FedEx",
            Page::Packaging => "Packaging",
            Page::Tracking => "Tracking",
            Page::CostOptimization => "Costs",
            Page::DeliveryTimes => "Delivery",
        }
    }

    /// Heading rendered at the top of the page body.
    pub fn heading(self) -> &'static str {
        match self {
            Page::Home => "Recent Discussions",
            Page::Popular => "Popular Discussions",
            Page::New => "Create a New Post",
            Page::UpsVsFedex => "UPS vs FedEx Discussions",
            Page::Packaging => "Packaging Solutions Discussions",
            Page::Tracking => "Tracking Issues Discussions",
            Page::CostOptimization => "Cost Optimization Discussions",
            Page::DeliveryTimes => "Delivery Times Discussions",
        }
    }

    /// Single-glyph icon shown before the label.
    pub fn icon(self) -> &'static str {
        match self {
            Page::Home => "⌂",
            Page::Popular => "↗",
            Page::New => "+",
            Page::UpsVsFedex => "⛟",
            Page::Packaging => "▣",
            Page::Tracking => "⌕",
            Page::CostOptimization => "$",
            Page::DeliveryTimes => "◷",
        }
    }

    pub fn nav_group(self) -> NavGroup {
        match self {
            Page::Home | Page::Popular | Page::New => NavGroup::Header,
            _ => NavGroup::Sidebar,
        }
    }

    /// Position in [`Page::ALL`].
    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// Page for a 1-based shortcut digit.
    pub fn from_shortcut(digit: char) -> Option<Page> {
        let n = digit.to_digit(10)? as usize;
        if n == 0 {
            return None;
        }
        Page::ALL.get(n - 1).copied()
    }

    /// Whether the page lists posts (every page except New Post).
    pub fn has_posts(self) -> bool {
        self != Page::New
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::from_id(&s.trim().to_ascii_lowercase()).ok_or_else(|| {
            let known: Vec<&str> = Page::ALL.iter().map(|p| p.id()).collect();
            format!("unknown page '{}' (expected one of: {})", s, known.join(", "))
        })
    }
}
