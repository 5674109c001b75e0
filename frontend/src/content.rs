//! Static copy shown on the landing page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience {
    Student,
    Parent,
    Teacher,
}

impl Audience {
    pub fn label(self) -> &'static str {
        match self {
            Audience::Student => "Student",
            Audience::Parent => "Parent",
            Audience::Teacher => "Teacher",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub audience: Audience,
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub content: &'static str,
    /// Stars, 1 to 5.
    pub rating: u8,
    pub color: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        id: 1,
        audience: Audience::Student,
        name: "Aarav K.",
        role: "5th Grade Student",
        avatar: "🦊",
        content: "Learning math is so fun now! I love collecting badges and competing with my friends on the leaderboard. I actually look forward to studying!",
        rating: 5,
        color: "#8B5CF6",
    },
    Testimonial {
        id: 2,
        audience: Audience::Parent,
        name: "Priya M.",
        role: "Parent of 2",
        avatar: "👩",
        content: "My kids went from dreading homework to asking for 'just one more game.' The progress reports help me track their improvement easily.",
        rating: 5,
        color: "#10B981",
    },
    Testimonial {
        id: 3,
        audience: Audience::Teacher,
        name: "Rajesh T.",
        role: "Science Teacher",
        avatar: "👨‍🏫",
        content: "The curriculum alignment is excellent. My students are more engaged in class because they've already explored concepts through the games.",
        rating: 5,
        color: "#3B82F6",
    },
    Testimonial {
        id: 4,
        audience: Audience::Student,
        name: "Ananya S.",
        role: "4th Grade Student",
        avatar: "🐱",
        content: "The science experiments are like magic! I learned about plants and now I'm growing my own at home. Science is the best!",
        rating: 5,
        color: "#F97316",
    },
    Testimonial {
        id: 5,
        audience: Audience::Parent,
        name: "Vikram P.",
        role: "Parent",
        avatar: "👨",
        content: "The platform is completely safe and ad-free. I can let my daughter use it without worrying. Her grades have improved significantly.",
        rating: 5,
        color: "#EC4899",
    },
    Testimonial {
        id: 6,
        audience: Audience::Teacher,
        name: "Sunita D.",
        role: "Math Teacher",
        avatar: "👩‍🏫",
        content: "I recommend LearnQuest to all my students. The gamified approach helps them grasp difficult concepts like fractions much faster.",
        rating: 5,
        color: "#06B6D4",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> Link {
    Link { label, href }
}

pub const NAV_LINKS: [Link; 4] = [
    link("How It Works", "#how-it-works"),
    link("Subjects", "#subjects"),
    link("Rewards", "#rewards"),
    link("For Parents", "#parents"),
];

pub struct Step {
    pub number: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        number: "01",
        icon: "🎯",
        title: "Pick Your Quest",
        description: "Choose from Math, Science, English or Social Studies. Each subject is a new adventure!",
        color: "#4F46E5",
    },
    Step {
        number: "02",
        icon: "🎮",
        title: "Play & Learn",
        description: "Dive into fun games and interactive lessons. Learning feels like playing your favorite game!",
        color: "#10B981",
    },
    Step {
        number: "03",
        icon: "🏆",
        title: "Earn Rewards",
        description: "Collect XP points, unlock cool badges, and climb the leaderboard. Show off your skills!",
        color: "#F97316",
    },
];

pub struct Subject {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Full CSS background, not a bare color.
    pub gradient: &'static str,
    pub games: u32,
    pub skills: [&'static str; 3],
}

pub const SUBJECTS: [Subject; 4] = [
    Subject {
        id: "math",
        title: "Mathematics",
        description: "Master numbers, algebra & geometry through exciting puzzle games!",
        icon: "🔢",
        gradient: "linear-gradient(135deg, #8B5CF6 0%, #6366F1 100%)",
        games: 45,
        skills: ["Addition", "Fractions", "Geometry"],
    },
    Subject {
        id: "science",
        title: "Science",
        description: "Explore physics, chemistry & biology with interactive experiments!",
        icon: "🔬",
        gradient: "linear-gradient(135deg, #10B981 0%, #059669 100%)",
        games: 38,
        skills: ["Experiments", "Nature", "Space"],
    },
    Subject {
        id: "english",
        title: "English",
        description: "Build vocabulary, grammar & reading skills through word adventures!",
        icon: "📚",
        gradient: "linear-gradient(135deg, #3B82F6 0%, #1D4ED8 100%)",
        games: 52,
        skills: ["Reading", "Writing", "Grammar"],
    },
    Subject {
        id: "social",
        title: "Social Studies",
        description: "Travel through history, geography & civics in immersive quests!",
        icon: "🌍",
        gradient: "linear-gradient(135deg, #F97316 0%, #EA580C 100%)",
        games: 35,
        skills: ["History", "Geography", "Civics"],
    },
];

/// Headline figure with a caption, used by the stat rows.
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const CATALOGUE_STATS: [Stat; 4] = [
    Stat {
        value: "170+",
        label: "Fun Games",
        icon: "🎮",
    },
    Stat {
        value: "1000+",
        label: "Lessons",
        icon: "📝",
    },
    Stat {
        value: "500+",
        label: "Quests",
        icon: "🗺️",
    },
    Stat {
        value: "50+",
        label: "Achievements",
        icon: "🏅",
    },
];

pub struct BadgeInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub color: &'static str,
    pub unlocked: bool,
}

const fn badge(
    icon: &'static str,
    title: &'static str,
    color: &'static str,
    unlocked: bool,
) -> BadgeInfo {
    BadgeInfo {
        icon,
        title,
        color,
        unlocked,
    }
}

pub const BADGES: [BadgeInfo; 8] = [
    badge("🌟", "Star Learner", "#FBBF24", true),
    badge("🎯", "Perfect Score", "#EF4444", true),
    badge("📚", "Bookworm", "#3B82F6", true),
    badge("🔥", "On Fire!", "#F97316", true),
    badge("🧠", "Big Brain", "#8B5CF6", true),
    badge("🏃", "Speed Runner", "#10B981", false),
    badge("💎", "Diamond", "#06B6D4", false),
    badge("🦸", "Super Hero", "#EC4899", false),
];

pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    pub xp: u64,
    pub avatar: &'static str,
    pub is_user: bool,
}

pub const LEADERBOARD: [LeaderboardEntry; 5] = [
    LeaderboardEntry {
        rank: 1,
        name: "Alex R.",
        xp: 12450,
        avatar: "🦊",
        is_user: false,
    },
    LeaderboardEntry {
        rank: 2,
        name: "Maya S.",
        xp: 11820,
        avatar: "🐱",
        is_user: false,
    },
    LeaderboardEntry {
        rank: 3,
        name: "Jake T.",
        xp: 11540,
        avatar: "🐶",
        is_user: false,
    },
    LeaderboardEntry {
        rank: 4,
        name: "Emma L.",
        xp: 10890,
        avatar: "🐰",
        is_user: false,
    },
    LeaderboardEntry {
        rank: 5,
        name: "You",
        xp: 9750,
        avatar: "🦉",
        is_user: true,
    },
];

/// The visitor's sample progress in the gamification preview.
pub struct PlayerProgress {
    pub level: u32,
    pub xp: u64,
    pub next_level_xp: u64,
    pub streak_days: u32,
    pub quests: u32,
}

pub const PLAYER: PlayerProgress = PlayerProgress {
    level: 12,
    xp: 9750,
    next_level_xp: 10500,
    streak_days: 15,
    quests: 47,
};

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub const TRUST_FEATURES: [Feature; 6] = [
    Feature {
        icon: "📊",
        title: "Real-Time Progress Tracking",
        description: "Monitor your child's learning journey with detailed analytics and weekly progress reports.",
        color: "#4F46E5",
    },
    Feature {
        icon: "📚",
        title: "Curriculum Aligned",
        description: "All content is aligned with NCERT and state board curricula for grades 4-6.",
        color: "#10B981",
    },
    Feature {
        icon: "🧠",
        title: "Proven Learning Outcomes",
        description: "Students show significant improvement in subject understanding within the first months.",
        color: "#F97316",
    },
    Feature {
        icon: "🔒",
        title: "Safe & Ad-Free",
        description: "100% safe environment with no ads, no external links, and COPPA compliant.",
        color: "#EC4899",
    },
    Feature {
        icon: "👩‍🏫",
        title: "Teacher Approved",
        description: "Content developed and reviewed by experienced educators and child psychologists.",
        color: "#8B5CF6",
    },
    Feature {
        icon: "📱",
        title: "Learn Anywhere",
        description: "Access on any device - tablet, phone, or computer. Sync progress across all devices.",
        color: "#06B6D4",
    },
];

pub const TRUST_STATS: [Stat; 4] = [
    Stat {
        value: "High",
        label: "Parent Satisfaction",
        icon: "",
    },
    Stat {
        value: "Many",
        label: "Lessons Completed",
        icon: "",
    },
    Stat {
        value: "Real",
        label: "Grade Improvement",
        icon: "",
    },
    Stat {
        value: "Top",
        label: "App Store Rating",
        icon: "",
    },
];

pub const TRUST_BADGES: [(&str, &str); 3] = [
    ("🛡️", "COPPA Compliant"),
    ("✅", "Curriculum Aligned"),
    ("🔐", "SSL Secured"),
];

pub const AUDIENCE_PILLS: [(&str, &str); 3] = [
    ("🧑‍🎓", "Students"),
    ("👨‍👩‍👧", "Parents"),
    ("👩‍🏫", "Teachers"),
];

/// Decorative icon drifting in a background layer. Positions are percent of
/// the section box.
pub struct Floater {
    pub left: u8,
    pub top: u8,
    pub icon: &'static str,
    pub size_px: u8,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

const fn floater(
    left: u8,
    top: u8,
    icon: &'static str,
    size_px: u8,
    duration_ms: u32,
    delay_ms: u32,
) -> Floater {
    Floater {
        left,
        top,
        icon,
        size_px,
        duration_ms,
        delay_ms,
    }
}

/// Fixed so every render places them identically.
pub const STARS: [Floater; 20] = [
    floater(5, 10, "✦", 12, 4000, 0),
    floater(15, 25, "✦", 14, 3500, 500),
    floater(25, 15, "✦", 10, 4500, 1000),
    floater(35, 35, "✦", 16, 3000, 300),
    floater(45, 8, "✦", 11, 5000, 800),
    floater(55, 28, "✦", 13, 3800, 1200),
    floater(65, 18, "✦", 15, 4200, 200),
    floater(75, 40, "✦", 12, 3300, 700),
    floater(85, 12, "✦", 14, 4800, 1500),
    floater(92, 32, "✦", 10, 3600, 400),
    floater(10, 60, "✦", 13, 4100, 1100),
    floater(30, 70, "✦", 11, 3400, 600),
    floater(50, 55, "✦", 15, 4600, 1300),
    floater(70, 65, "✦", 12, 3200, 900),
    floater(88, 75, "✦", 14, 4400, 1800),
    floater(20, 85, "✦", 10, 3700, 100),
    floater(40, 90, "✦", 16, 4300, 1400),
    floater(60, 80, "✦", 11, 3900, 850),
    floater(80, 88, "✦", 13, 4700, 1600),
    floater(95, 50, "✦", 12, 3100, 1900),
];

pub const CTA_FLOATERS: [Floater; 15] = [
    floater(5, 15, "⭐", 30, 6000, 0),
    floater(15, 45, "🎮", 30, 7000, 500),
    floater(25, 75, "🏆", 30, 5500, 1000),
    floater(35, 25, "📚", 30, 8000, 300),
    floater(45, 85, "🎯", 30, 6500, 800),
    floater(55, 35, "✨", 30, 7500, 1200),
    floater(65, 65, "🌟", 30, 5000, 200),
    floater(75, 10, "💎", 30, 8500, 700),
    floater(85, 55, "⭐", 30, 6200, 1500),
    floater(92, 80, "🎮", 30, 7200, 400),
    floater(10, 90, "🏆", 30, 5800, 1100),
    floater(50, 5, "📚", 30, 6800, 600),
    floater(80, 30, "🎯", 30, 7800, 1300),
    floater(20, 60, "✨", 30, 5300, 900),
    floater(70, 40, "🌟", 30, 6300, 1800),
];

pub struct LinkColumn {
    pub title: &'static str,
    pub links: [Link; 4],
}

pub const FOOTER_COLUMNS: [LinkColumn; 4] = [
    LinkColumn {
        title: "Product",
        links: [
            link("Features", "#"),
            link("Pricing", "#"),
            link("Subjects", "#subjects"),
            link("Games", "#"),
        ],
    },
    LinkColumn {
        title: "Company",
        links: [
            link("About Us", "#"),
            link("Careers", "#"),
            link("Blog", "#"),
            link("Press", "#"),
        ],
    },
    LinkColumn {
        title: "Support",
        links: [
            link("Help Center", "#"),
            link("Contact Us", "#"),
            link("FAQs", "#"),
            link("Community", "#"),
        ],
    },
    LinkColumn {
        title: "Legal",
        links: [
            link("Privacy Policy", "#"),
            link("Terms of Service", "#"),
            link("Cookie Policy", "#"),
            link("COPPA", "#"),
        ],
    },
];

pub const SOCIAL_LINKS: [(&str, Link); 4] = [
    ("📘", link("Facebook", "#")),
    ("🐦", link("Twitter", "#")),
    ("📸", link("Instagram", "#")),
    ("🎥", link("YouTube", "#")),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn testimonials_are_well_formed() {
        for (i, t) in TESTIMONIALS.iter().enumerate() {
            assert_eq!(t.id as usize, i + 1);
            assert!((1..=5).contains(&t.rating));
            assert!(Rgb::parse(t.color).is_ok(), "{}", t.color);
        }
    }

    #[test]
    fn badge_and_feature_colors_parse() {
        for b in &BADGES {
            assert!(Rgb::parse(b.color).is_ok(), "{}", b.color);
        }
        for f in &TRUST_FEATURES {
            assert!(Rgb::parse(f.color).is_ok(), "{}", f.color);
        }
    }

    #[test]
    fn exactly_one_leaderboard_row_is_the_visitor() {
        assert_eq!(LEADERBOARD.iter().filter(|e| e.is_user).count(), 1);
        assert!(LEADERBOARD.windows(2).all(|w| w[0].xp >= w[1].xp));
    }

    #[test]
    fn nav_targets_exist_as_section_ids() {
        let ids = ["#how-it-works", "#subjects", "#rewards", "#parents"];
        for l in &NAV_LINKS {
            assert!(ids.contains(&l.href), "{}", l.href);
        }
    }
}
