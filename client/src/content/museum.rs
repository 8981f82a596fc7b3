//! Institutional copy: people, figures, and the ways to reach the museum.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

/// A headline figure such as `500K+ Annual Visitors`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
}

/// A titled paragraph (values, timeline entries, FAQ answers).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blurb {
    pub title: &'static str,
    pub body: &'static str,
}

/// A contact channel card with its detail lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub glyph: &'static str,
    pub details: &'static [&'static str],
}

pub const MUSEUM_NAME: &str = "Musea";
pub const TAGLINE: &str = "Discover extraordinary art collections and exhibitions at Musea Art Museum";
pub const ADDRESS: &str = "123 Art District Avenue, Cultural Quarter, City 12345";
pub const MAIN_PHONE: &str = "+1 (555) 123-4567";
pub const INFO_EMAIL: &str = "info@musea.com";
pub const VISIT_EMAIL: &str = "visit@musea.com";

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Dr. Sarah Mitchell",
        role: "Director & Chief Curator",
        image: "/images/l-intro-1733933490.jpg",
        bio: "Leading art historian with 25+ years of experience in museum curation and cultural preservation.",
    },
    TeamMember {
        name: "Marcus Rodriguez",
        role: "Head of Collections",
        image: "/images/museum.jpg",
        bio: "Expert in contemporary art with a passion for discovering and nurturing emerging artistic talents.",
    },
    TeamMember {
        name: "Elena Chen",
        role: "Education Director",
        image: "/images/facial-therapy-scaled.jpg",
        bio: "Dedicated to making art education accessible and engaging for visitors of all ages and backgrounds.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Musea has transformed how I see and understand art. Every visit is a journey of discovery.",
        author: "Jennifer Walsh",
        role: "Art Enthusiast",
    },
    Testimonial {
        quote: "The educational programs here are exceptional. My students always leave inspired and motivated.",
        author: "Prof. David Kim",
        role: "Art History Professor",
    },
    Testimonial {
        quote: "A world-class institution that perfectly balances tradition with innovation.",
        author: "Maria Santos",
        role: "Cultural Critic",
    },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { number: "50+", label: "Years of Excellence", glyph: "\u{2605}" },
    Stat { number: "500K+", label: "Annual Visitors", glyph: "\u{263A}" },
    Stat { number: "10K+", label: "Artworks", glyph: "\u{25C9}" },
    Stat { number: "200+", label: "Artists Featured", glyph: "\u{2665}" },
];

pub const HERO_STATS: &[Stat] = &[
    Stat { number: "500+", label: "Artworks", glyph: "\u{25A3}" },
    Stat { number: "50+", label: "Artists", glyph: "\u{263A}" },
    Stat { number: "12", label: "Exhibitions", glyph: "\u{2316}" },
];

pub const GALLERY_STATS: &[Stat] = &[
    Stat { number: "500+", label: "Artworks in Collection", glyph: "\u{25A3}" },
    Stat { number: "50+", label: "Featured Artists", glyph: "\u{263A}" },
    Stat { number: "12", label: "Active Exhibitions", glyph: "\u{2316}" },
    Stat { number: "25k+", label: "Annual Visitors", glyph: "\u{2605}" },
];

pub const VALUES: &[Blurb] = &[
    Blurb {
        title: "Vision",
        body: "To be the world's leading cultural institution, inspiring creativity and fostering understanding through art.",
    },
    Blurb {
        title: "Mission",
        body: "We collect, preserve, and exhibit exceptional works of art to educate and inspire diverse audiences.",
    },
    Blurb {
        title: "Innovation",
        body: "We embrace new technologies and approaches to make art accessible to everyone, everywhere.",
    },
];

pub const HISTORY: &[Blurb] = &[
    Blurb {
        title: "1970 - Foundation",
        body: "Musea was founded by a group of passionate art collectors and cultural visionaries who wanted to create a space where art could be accessible to everyone.",
    },
    Blurb {
        title: "1985 - Expansion",
        body: "Major renovation and expansion doubled our exhibition space, allowing us to showcase larger collections and host international exhibitions.",
    },
    Blurb {
        title: "2010 - Digital Innovation",
        body: "Launched our digital initiatives, making our collections accessible online and pioneering virtual reality art experiences.",
    },
    Blurb {
        title: "Today - Global Recognition",
        body: "Recognized as one of the world's leading cultural institutions, continuing to push boundaries in art curation and education.",
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Visit Us",
        glyph: "\u{2316}",
        details: &["123 Art District Avenue", "Cultural Quarter, City 12345", "United States"],
    },
    ContactChannel {
        title: "Call Us",
        glyph: "\u{260E}",
        details: &[
            "General: +1 (555) 123-4567",
            "Groups: +1 (555) 123-4568",
            "Education: +1 (555) 123-4569",
        ],
    },
    ContactChannel {
        title: "Email Us",
        glyph: "\u{2709}",
        details: &["info@musea.com", "visit@musea.com", "education@musea.com"],
    },
    ContactChannel {
        title: "Office Hours",
        glyph: "\u{25F7}",
        details: &[
            "Monday - Friday: 9:00 AM - 6:00 PM",
            "Saturday: 10:00 AM - 4:00 PM",
            "Sunday: Closed",
        ],
    },
];

pub const QUICK_ANSWERS: &[Blurb] = &[
    Blurb {
        title: "What are your opening hours?",
        body: "Monday-Friday: 10:00 AM - 6:00 PM. Saturday-Sunday: 9:00 AM - 8:00 PM.",
    },
    Blurb {
        title: "How much is admission?",
        body: "Adults: $25, Students/Seniors: $18. Children (5-12): $12, Family Pass: $65.",
    },
    Blurb {
        title: "Do you offer group discounts?",
        body: "Yes! Groups of 10+ receive 15% off admission. Contact us for educational group rates.",
    },
    Blurb {
        title: "Is parking available?",
        body: "Free parking is available on-site. Accessible parking spaces are available.",
    },
];
