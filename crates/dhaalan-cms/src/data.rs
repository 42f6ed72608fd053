#![forbid(unsafe_code)]

//! Static expo content.
//!
//! TODO: replace with the published exhibitor/schedule lists once the
//! organizers finalize them; booth numbers below are from the draft floor
//! plan.

use crate::types::{
    Announcement, Exhibitor, GalleryImage, ImportantInfo, Localized, NewsArticle, Opportunity,
    OpportunityType, Resource, ResourceCategory, ResourceType, Session, SessionType, Speaker,
    Sponsor, SponsorTier, Update, UpdateCategory, UpdateStatus, UpdateType, Zone,
};

fn l(en: &str, dv: &str) -> Localized {
    Localized::new(en, dv)
}

pub fn exhibitors() -> Vec<Exhibitor> {
    vec![
        Exhibitor {
            id: 1,
            name: "Bank of Maldives".into(),
            zone: Zone::CareerHub,
            booth: "A-01".into(),
            description: l(
                "The nation's leading bank, hiring across retail and digital banking.",
                "ޤައުމުގެ އެންމެ ބޮޑު ބޭންކް",
            ),
            website: Some("https://www.bankofmaldives.com.mv".into()),
        },
        Exhibitor {
            id: 2,
            name: "Dhiraagu".into(),
            zone: Zone::CareerHub,
            booth: "A-02".into(),
            description: l(
                "Telecommunications and digital services provider.",
                "ޓެލެކޮމިއުނިކޭޝަން ޚިދުމަތްދޭ ކުންފުނި",
            ),
            website: Some("https://www.dhiraagu.com.mv".into()),
        },
        Exhibitor {
            id: 3,
            name: "Loopcraft".into(),
            zone: Zone::InnovationStartup,
            booth: "D-04".into(),
            description: l(
                "Software studio building products for the digital economy.",
                "",
            ),
            website: Some("https://loopcraft.mv".into()),
        },
        Exhibitor {
            id: 4,
            name: "Villa College".into(),
            zone: Zone::EducationProvider,
            booth: "B-01".into(),
            description: l("Higher education across business, IT and marine studies.", ""),
            website: Some("https://villacollege.edu.mv".into()),
        },
        Exhibitor {
            id: 5,
            name: "Ooredoo Maldives".into(),
            zone: Zone::CareerHub,
            booth: "A-03".into(),
            description: l("Connectivity and fintech careers.", ""),
            website: None,
        },
        Exhibitor {
            id: 6,
            name: "The Maldives Waterman".into(),
            zone: Zone::SkillsExperience,
            booth: "C-02".into(),
            description: l("Ocean skills, safety training and water sports careers.", ""),
            website: None,
        },
    ]
}

/// Names shown in the homepage carousel, in display order.
pub const FEATURED_EXHIBITORS: [&str; 4] = [
    "Bank of Maldives",
    "Dhiraagu",
    "Villa College",
    "The Maldives Waterman",
];

pub fn opportunities() -> Vec<Opportunity> {
    vec![
        Opportunity {
            id: 1,
            title: "Junior Software Developer".into(),
            exhibitor_name: "Loopcraft".into(),
            kind: OpportunityType::FullTime,
            zone: Zone::InnovationStartup,
            url: Some("https://loopcraft.mv/careers/junior-dev".into()),
        },
        Opportunity {
            id: 2,
            title: "UX Design Intern".into(),
            exhibitor_name: "Loopcraft".into(),
            kind: OpportunityType::Internship,
            zone: Zone::InnovationStartup,
            url: None,
        },
        Opportunity {
            id: 3,
            title: "Graduate Trainee - Digital Banking".into(),
            exhibitor_name: "Bank of Maldives".into(),
            kind: OpportunityType::FullTime,
            zone: Zone::CareerHub,
            url: Some("https://www.bankofmaldives.com.mv/careers".into()),
        },
        Opportunity {
            id: 4,
            title: "Network Engineering Apprentice".into(),
            exhibitor_name: "Dhiraagu".into(),
            kind: OpportunityType::Apprenticeship,
            zone: Zone::CareerHub,
            url: None,
        },
        Opportunity {
            id: 5,
            title: "Customer Experience Agent (Part-time)".into(),
            exhibitor_name: "Ooredoo Maldives".into(),
            kind: OpportunityType::PartTime,
            zone: Zone::CareerHub,
            url: Some("https://www.ooredoo.mv/careers".into()),
        },
        Opportunity {
            id: 6,
            title: "Water Safety Instructor".into(),
            exhibitor_name: "The Maldives Waterman".into(),
            kind: OpportunityType::PartTime,
            zone: Zone::SkillsExperience,
            url: None,
        },
    ]
}

pub fn speakers() -> Vec<Speaker> {
    vec![
        Speaker {
            id: 1,
            name: "Aishath Naseem".into(),
            role: l("CTO, Loopcraft", ""),
            bio: l(
                "Leads product engineering and mentors early-career developers.",
                "",
            ),
        },
        Speaker {
            id: 2,
            name: "Hussain Rasheed".into(),
            role: l("Director of Skills Development", ""),
            bio: l("Oversees the national technical and vocational framework.", ""),
        },
        Speaker {
            id: 3,
            name: "Mariyam Shifa".into(),
            role: l("Head of Digital Banking, Bank of Maldives", ""),
            bio: l("Built the bank's mobile-first services team.", ""),
        },
    ]
}

pub fn sessions() -> Vec<Session> {
    vec![
        Session {
            id: 1,
            day: 1,
            time: "09:30".into(),
            title: l("Opening Ceremony", "ހުޅުވުމުގެ ރަސްމިއްޔާތު"),
            kind: SessionType::Ceremony,
            location: "Main Stage".into(),
            speaker_ids: vec![2],
        },
        Session {
            id: 2,
            day: 1,
            time: "11:00".into(),
            title: l("Careers in the Digital Economy", ""),
            kind: SessionType::Panel,
            location: "Main Stage".into(),
            speaker_ids: vec![1, 3],
        },
        Session {
            id: 3,
            day: 2,
            time: "10:00".into(),
            title: l("CV Clinic: Stand Out on Paper", ""),
            kind: SessionType::Workshop,
            location: "Skills Lab".into(),
            speaker_ids: vec![],
        },
        Session {
            id: 4,
            day: 2,
            time: "14:00".into(),
            title: l("From Intern to Engineer", ""),
            kind: SessionType::Talk,
            location: "Innovation Hub".into(),
            speaker_ids: vec![1],
        },
        Session {
            id: 5,
            day: 3,
            time: "16:00".into(),
            title: l("Closing & Awards", ""),
            kind: SessionType::Ceremony,
            location: "Main Stage".into(),
            speaker_ids: vec![2],
        },
    ]
}

pub fn news() -> Vec<NewsArticle> {
    vec![
        NewsArticle {
            id: 1,
            date: "2025-09-02".into(),
            title: l("Registration opens for Dhaalan 2025", ""),
            excerpt: l("Attendee registration is now open for all three days.", ""),
        },
        NewsArticle {
            id: 2,
            date: "2025-10-10".into(),
            title: l("Fifty exhibitors confirmed", ""),
            excerpt: l("The exhibitor line-up now spans all six zones.", ""),
        },
        NewsArticle {
            id: 3,
            date: "2025-09-20".into(),
            title: l("Speaker line-up announced", ""),
            excerpt: l("Industry leaders join the main-stage programme.", ""),
        },
    ]
}

pub fn resources() -> Vec<Resource> {
    vec![
        Resource {
            id: 1,
            category: ResourceCategory::EventGuides,
            kind: ResourceType::Pdf,
            title: l("Visitor Guide", "ޒިޔާރަތްކުރާ ފަރާތްތަކުގެ ގައިޑް"),
            description: l("Everything you need to plan your visit.", ""),
            file_url: "/files/visitor-guide.pdf".into(),
            file_size: "2.1 MB".into(),
        },
        Resource {
            id: 2,
            category: ResourceCategory::CareerResources,
            kind: ResourceType::Docx,
            title: l("CV Template", ""),
            description: l("A clean starting point for your application.", ""),
            file_url: "/files/cv-template.docx".into(),
            file_size: "84 KB".into(),
        },
        Resource {
            id: 3,
            category: ResourceCategory::MediaKit,
            kind: ResourceType::Zip,
            title: l("Press & Media Kit", ""),
            description: l("Logos and brand assets for coverage.", ""),
            file_url: "/files/media-kit.zip".into(),
            file_size: "14 MB".into(),
        },
    ]
}

pub fn sponsors() -> Vec<Sponsor> {
    vec![
        Sponsor {
            id: 1,
            name: "Bank of Maldives".into(),
            tier: SponsorTier::Main,
        },
        Sponsor {
            id: 2,
            name: "Dhiraagu".into(),
            tier: SponsorTier::Gold,
        },
        Sponsor {
            id: 3,
            name: "Ooredoo Maldives".into(),
            tier: SponsorTier::Gold,
        },
        Sponsor {
            id: 4,
            name: "Villa College".into(),
            tier: SponsorTier::Silver,
        },
    ]
}

pub fn updates() -> Vec<Update> {
    vec![
        Update {
            id: 1,
            date: "2025-10-28".into(),
            kind: UpdateType::ScheduleChange,
            title: l("Day 2 workshop moved to Skills Lab", ""),
            category: UpdateCategory::Venue,
            status: UpdateStatus::Completed,
        },
        Update {
            id: 2,
            date: "2025-11-01".into(),
            kind: UpdateType::Announcement,
            title: l("On-site registration desk hours extended", ""),
            category: UpdateCategory::Registration,
            status: UpdateStatus::New,
        },
    ]
}

pub fn announcements() -> Vec<Announcement> {
    vec![Announcement {
        id: 1,
        message: l(
            "Early-bird exhibitor applications close 30 September.",
            "",
        ),
        active: true,
    }]
}

pub fn gallery_images() -> Vec<GalleryImage> {
    vec![
        GalleryImage {
            id: 1,
            url: "/gallery/2024-opening.jpg".into(),
            caption: l("Opening day, Dhaalan 2024", ""),
        },
        GalleryImage {
            id: 2,
            url: "/gallery/2024-skills-lab.jpg".into(),
            caption: l("Hands-on session in the Skills Lab", ""),
        },
    ]
}

pub fn important_info() -> Vec<ImportantInfo> {
    vec![
        ImportantInfo {
            id: 1,
            title: l("Opening hours", "ހުޅުވިފައި ހުންނަ ގަޑިތައް"),
            body: l("10:00 – 22:00, all three days.", ""),
        },
        ImportantInfo {
            id: 2,
            title: l("Getting there", ""),
            body: l("Central Park, Hulhumale'. Free shuttle from the ferry terminal.", ""),
        },
    ]
}
