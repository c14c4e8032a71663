//! Static page content: competitions, artists, schedule, gallery and links.
//!
//! Everything here is `'static` and read-only. Asset URLs are opaque.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventIcon {
    Music,
    Crown,
    Palette,
    Trophy,
}

#[derive(Debug)]
pub struct Event {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub prize: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub icon: EventIcon,
    pub image: &'static str,
    pub description: &'static str,
    pub rules: &'static [&'static str],
}

#[derive(Debug)]
pub struct Artist {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub time: &'static str,
    pub stage: &'static str,
    pub bio: &'static str,
    pub tracks: &'static [&'static str],
}

#[derive(Debug)]
pub struct ScheduleItem {
    pub time: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScheduleDay {
    #[default]
    Day1,
    Day2,
}

impl ScheduleDay {
    pub const ALL: [ScheduleDay; 2] = [ScheduleDay::Day1, ScheduleDay::Day2];

    pub fn label(self) -> &'static str {
        match self {
            ScheduleDay::Day1 => "Day 1",
            ScheduleDay::Day2 => "Day 2",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }

    pub fn items(self) -> &'static [ScheduleItem] {
        match self {
            ScheduleDay::Day1 => SCHEDULE_DAY_1,
            ScheduleDay::Day2 => SCHEDULE_DAY_2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            ScheduleDay::Day1 => ScheduleDay::Day2,
            ScheduleDay::Day2 => ScheduleDay::Day1,
        }
    }

    pub fn previous(self) -> Self {
        // two days, so stepping back is the same as stepping forward
        self.next()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileSpan {
    Feature, // two columns, two rows
    Wide,    // two columns
    Single,
}

impl TileSpan {
    pub fn class(self) -> &'static str {
        match self {
            TileSpan::Feature => "tile tile-feature",
            TileSpan::Wide => "tile tile-wide",
            TileSpan::Single => "tile",
        }
    }
}

#[derive(Debug)]
pub struct GalleryImage {
    pub span: TileSpan,
    pub url: &'static str,
}

#[derive(Debug)]
pub struct Showcase {
    pub title: &'static str,
    pub credit: &'static str,
    pub video: &'static str,
    pub poster: &'static str,
}

/// In-page navigation targets. Their ids are the page's routing contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Hero,
    Lineup,
    Passes,
    Competitions,
    Gallery,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::Hero,
        Anchor::Lineup,
        Anchor::Passes,
        Anchor::Competitions,
        Anchor::Gallery,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Hero => "hero",
            Anchor::Lineup => "lineup",
            Anchor::Passes => "passes",
            Anchor::Competitions => "competitions",
            Anchor::Gallery => "gallery",
        }
    }

    /// Accepts `"lineup"`, `"#lineup"`; an empty fragment or `"#"` is the top of the page.
    pub fn from_href(href: &str) -> Option<Self> {
        let id = href.trim_start_matches('#');
        if id.is_empty() {
            return Some(Anchor::Hero);
        }
        Self::ALL.into_iter().find(|a| a.id() == id)
    }
}

#[derive(Debug)]
pub struct Link {
    pub label: &'static str,
    pub anchor: Option<Anchor>,
}

pub const FESTIVAL_NAME: &str = "आROHAN";
pub const FESTIVAL_DATES: &str = "March 24 - 26 • 2026";
pub const FESTIVAL_TAGLINE: &str = "The Rising Rhythm.";

pub static EVENTS: &[Event] = &[
    Event {
        title: "Mridangam",
        subtitle: "Battle of Bands",
        prize: "₹50k Pool",
        date: "Day 1",
        time: "10:00 AM - 4:00 PM",
        icon: EventIcon::Music,
        image: "https://images.unsplash.com/photo-1514320291840-2e0a9bf2a9ae?q=80&w=1000&auto=format&fit=crop",
        description: "The ultimate clash of musical titans. Fusion, rock, or classical – bring your best sound to the stage. Bands will be judged on harmony, stage presence, and crowd interaction.",
        rules: &[
            "Time limit: 15 minutes (including setup)",
            "Minimum 3 members per band",
            "No backing tracks allowed",
        ],
    },
    Event {
        title: "Nritya",
        subtitle: "Group Dance",
        prize: "₹30k Pool",
        date: "Day 2",
        time: "2:00 PM - 6:00 PM",
        icon: EventIcon::Crown,
        image: "https://images.unsplash.com/photo-1547153760-18fc86324498?q=80&w=1000&auto=format&fit=crop",
        description: "Sync your steps and rhythm in this high-energy group dance battle. From classical Bharatanatyam to contemporary Hip-Hop, showcase your choreography.",
        rules: &[
            "Time limit: 8 minutes",
            "Team size: 6-12 members",
            "Props are allowed but must be cleared",
        ],
    },
    Event {
        title: "Chitra",
        subtitle: "Live Art",
        prize: "₹20k Pool",
        date: "Day 1-2",
        time: "Ongoing",
        icon: EventIcon::Palette,
        image: "https://images.unsplash.com/photo-1513364776144-60967b0f800f?q=80&w=1000&auto=format&fit=crop",
        description: "Let your canvas speak. Artists will capture the essence of the festival live. The theme will be given on the spot.",
        rules: &[
            "Canvas provided by organizers",
            "Bring your own paints/brushes",
            "Digital art is not permitted",
        ],
    },
    Event {
        title: "Natya",
        subtitle: "Street Play",
        prize: "₹15k Pool",
        date: "Day 3",
        time: "11:00 AM - 1:00 PM",
        icon: EventIcon::Trophy,
        image: "https://images.unsplash.com/photo-1533174072545-e8d4aa97edf9?q=80&w=1000&auto=format&fit=crop",
        description: "Voices that echo change. Perform compelling street plays that touch upon social issues with satire, humor, and emotion.",
        rules: &[
            "Time limit: 12 minutes",
            "No microphones allowed",
            "Language: English or Hindi",
        ],
    },
];

pub static ARTISTS: &[Artist] = &[
    Artist {
        name: "Project Mishram",
        role: "Carnatic Fusion",
        image: "https://images.unsplash.com/photo-1511192336575-5a79af67a629?auto=format&fit=crop&q=80&w=1000&h=1000",
        time: "7:00 PM - 8:30 PM",
        stage: "Main Audi",
        bio: "A progressive Carnatic fusion band that blends traditional Indian classical music with modern metal, jazz, and electronic elements. Known for their high-energy performances and complex rhythmic structures.",
        tracks: &["Kanakana", "Nalinakanthi", "Mishra Pilu"],
    },
    Artist {
        name: "The Raghu Dixit Project",
        role: "Folk Rock",
        image: "./raghu.jpg",
        time: "8:45 PM - 10:30 PM",
        stage: "Open Air Theatre",
        bio: "India's highest-selling non-film music export. Raghu Dixit's music is a seamless amalgamation of Indian ethnic music and styles from different parts of the world. Infectious, happy, and soul-stirring.",
        tracks: &["Jag Changa", "Hey Bhagwan", "Lokada Kalaji"],
    },
    Artist {
        name: "Atif Aslam",
        role: "Playback singer & Songwriter",
        image: "./atif-aslam.jpg",
        time: "5:30 PM - 6:45 PM",
        stage: "Heritage Courtyard",
        bio: "Born in Wazirabad, Punjab, Atif Aslam started his music career in early 2000s. He released his debut album, Jal Pari, in 2004. He went on to sing songs in both Indian (Bollywood) and Pakistani (Lollywood) film industries.",
        tracks: &["Raag Yaman", "Thumri in Mishra Khamaj", "Tarana"],
    },
];

static SCHEDULE_DAY_1: &[ScheduleItem] = &[
    ScheduleItem { time: "09:00 AM", title: "Inauguration Ceremony", location: "Main Auditorium", kind: "General" },
    ScheduleItem { time: "10:00 AM", title: "Mridangam (Battle of Bands)", location: "Open Air Stage", kind: "Competition" },
    ScheduleItem { time: "11:00 AM", title: "Tech Talk: AI Future", location: "Seminar Hall A", kind: "Workshop" },
    ScheduleItem { time: "02:00 PM", title: "Chitra (Live Art) Begins", location: "Quadrangle", kind: "Competition" },
    ScheduleItem { time: "06:00 PM", title: "DJ Night ft. Lost Stories", location: "Main Ground", kind: "Pro-Show" },
];

static SCHEDULE_DAY_2: &[ScheduleItem] = &[
    ScheduleItem { time: "09:30 AM", title: "Hackathon Finale", location: "CS Block", kind: "Competition" },
    ScheduleItem { time: "11:00 AM", title: "Stand-up Comedy", location: "Main Auditorium", kind: "Entertainment" },
    ScheduleItem { time: "02:00 PM", title: "Nritya (Group Dance)", location: "Main Stage", kind: "Competition" },
    ScheduleItem { time: "05:00 PM", title: "Fashion Show", location: "Ramp Area", kind: "Entertainment" },
    ScheduleItem { time: "07:00 PM", title: "Closing Ceremony", location: "Main Stage", kind: "General" },
];

pub static GALLERY: &[GalleryImage] = &[
    GalleryImage { span: TileSpan::Feature, url: "https://images.unsplash.com/photo-1493225255756-d9584f8606e9?auto=format&fit=crop&q=80&w=800" },
    GalleryImage { span: TileSpan::Single, url: "https://images.unsplash.com/photo-1533174072545-e8d4aa97edf9?auto=format&fit=crop&q=80&w=400" },
    GalleryImage { span: TileSpan::Single, url: "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?auto=format&fit=crop&q=80&w=400" },
    GalleryImage { span: TileSpan::Wide, url: "https://images.unsplash.com/photo-1514525253440-b393452e233e?auto=format&fit=crop&q=80&w=800" },
    GalleryImage { span: TileSpan::Single, url: "https://images.unsplash.com/photo-1459749411177-0473ef716175?auto=format&fit=crop&q=80&w=400" },
];

pub static SHOWCASE: Showcase = Showcase {
    title: "Aftermovie '25",
    credit: "Directed by Media Cell",
    video: "https://assets.mixkit.co/videos/preview/mixkit-concert-crowd-lights-2089-large.mp4",
    poster: "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3?auto=format&fit=crop&q=80&w=1600",
};

pub static NAV_LINKS: &[Link] = &[
    Link { label: "Home", anchor: Some(Anchor::Hero) },
    Link { label: "Lineup", anchor: Some(Anchor::Lineup) },
    Link { label: "Competitions", anchor: Some(Anchor::Competitions) },
    Link { label: "Gallery", anchor: Some(Anchor::Gallery) },
];

pub static FOOTER_EXPLORE: &[Link] = &[
    Link { label: "Home", anchor: Some(Anchor::Hero) },
    Link { label: "Star Lineup", anchor: Some(Anchor::Lineup) },
    Link { label: "Competitions", anchor: Some(Anchor::Competitions) },
    Link { label: "Gallery", anchor: Some(Anchor::Gallery) },
];

pub static FOOTER_RESOURCES: &[Link] = &[
    Link { label: "Rule Book", anchor: None },
    Link { label: "Sponsorship Brochure", anchor: None },
    Link { label: "Code of Conduct", anchor: None },
    Link { label: "Contact Support", anchor: None },
];

/// Element ids the web front-end expects in `index.html`.
pub mod dom_ids {
    pub const NAV: &str = "site-nav";
    pub const MENU_TOGGLE: &str = "menu-toggle";
    pub const MOBILE_MENU: &str = "mobile-menu";
    pub const TOTEM_CANVAS: &str = "totem-canvas";
    pub const HERO_BOOKING: &str = "hero-get-passes";
    pub const NAV_BOOKING: &str = "nav-get-passes";
    pub const MENU_BOOKING: &str = "menu-get-passes";
    pub const PASSES_BOOKING: &str = "passes-grab";

    pub const LINEUP_GRID: &str = "lineup-grid";
    pub const ARTIST_MODAL: &str = "artist-modal";
    pub const ARTIST_BODY: &str = "artist-modal-body";

    pub const EVENTS_GRID: &str = "events-grid";
    pub const EVENT_MODAL: &str = "event-modal";
    pub const EVENT_BODY: &str = "event-modal-body";
    pub const SCHEDULE_OPEN: &str = "schedule-open";
    pub const SCHEDULE_MODAL: &str = "schedule-modal";
    pub const SCHEDULE_TABS: &str = "schedule-tabs";
    pub const SCHEDULE_LIST: &str = "schedule-list";

    pub const BOOKING_MODAL: &str = "booking-modal";
    pub const BOOKING_FORM: &str = "booking-form";
    pub const BOOKING_SUBMIT: &str = "booking-submit";
    pub const BOOKING_ERROR: &str = "booking-error";
    pub const BOOKING_SUCCESS: &str = "booking-success";
    pub const FIELD_NAME: &str = "field-name";
    pub const FIELD_EMAIL: &str = "field-email";
    pub const FIELD_PHONE: &str = "field-phone";
    pub const FIELD_PASS: &str = "field-pass";

    pub const GALLERY_WALL: &str = "gallery-wall";
    pub const SHOWCASE_VIDEO: &str = "showcase-video";
    pub const FOOTER_EXPLORE: &str = "footer-explore";
    pub const FOOTER_RESOURCES: &str = "footer-resources";
}
