//! Static shell content
//!
//! Navigation links, dock apps, gallery and Finder folder trees. None of this
//! is configurable at runtime.

use crate::id::WindowId;
use crate::registry::WindowRegistry;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

/// Link in the top navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Position in the bar
    pub id: u32,
    /// Label
    pub name: &'static str,
    /// Window opened on click
    pub target: WindowId,
}

/// Status icon in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavIcon {
    /// Position in the bar
    pub id: u32,
    /// Icon path
    pub img: &'static str,
}

/// Application in the dock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DockApp {
    /// Window toggled by the icon
    pub id: WindowId,
    /// Tooltip label
    pub name: &'static str,
    /// Icon file
    pub icon: &'static str,
    /// Disabled icons ignore clicks
    pub can_open: bool,
}

/// Group of technologies shown by the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechCategory {
    /// Group heading
    pub category: &'static str,
    /// Entries
    pub items: &'static [&'static str],
}

/// Social profile on the contact card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Social {
    /// Position on the card
    pub id: u32,
    /// Label
    pub text: &'static str,
    /// Icon path
    pub icon: &'static str,
    /// Background color
    pub bg: &'static str,
    /// Profile URL
    pub link: &'static str,
}

/// Sidebar entry of the photos app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhotoLink {
    /// Position in the sidebar
    pub id: u32,
    /// Icon path
    pub icon: &'static str,
    /// Label
    pub title: &'static str,
}

/// Image in the photos gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    /// Position in the gallery
    pub id: u32,
    /// Image path
    pub img: &'static str,
}

/// Navigation bar links
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        id: 1,
        name: "Projects",
        target: WindowId::Finder,
    },
    NavLink {
        id: 3,
        name: "Contact",
        target: WindowId::Contact,
    },
    NavLink {
        id: 4,
        name: "Resume",
        target: WindowId::Resume,
    },
];

/// Navigation bar status icons
pub const NAV_ICONS: [NavIcon; 4] = [
    NavIcon {
        id: 1,
        img: "/icons/wifi.svg",
    },
    NavIcon {
        id: 2,
        img: "/icons/search.svg",
    },
    NavIcon {
        id: 3,
        img: "/icons/user.svg",
    },
    NavIcon {
        id: 4,
        img: "/icons/mode.svg",
    },
];

/// Dock applications, left to right
pub const DOCK_APPS: [DockApp; 7] = [
    DockApp {
        id: WindowId::Finder,
        name: "Portfolio",
        icon: "finder.png",
        can_open: true,
    },
    DockApp {
        id: WindowId::Safari,
        name: "Articles",
        icon: "safari.png",
        can_open: true,
    },
    DockApp {
        id: WindowId::Photos,
        name: "Photos",
        icon: "photos.png",
        can_open: true,
    },
    DockApp {
        id: WindowId::Contact,
        name: "Contact",
        icon: "contact.png",
        can_open: true,
    },
    DockApp {
        id: WindowId::Terminal,
        name: "Skills",
        icon: "terminal.png",
        can_open: true,
    },
    DockApp {
        id: WindowId::ChatGpt,
        name: "ChatGPT",
        icon: "chatgpt.png",
        can_open: true,
    },
    DockApp {
        id: WindowId::Trash,
        name: "Trash",
        icon: "trash.png",
        can_open: true,
    },
];

/// Technologies listed by the skills terminal
pub const TECH_STACK: [TechCategory; 6] = [
    TechCategory {
        category: "Frontend",
        items: &["React.js", "Next.js", "TypeScript"],
    },
    TechCategory {
        category: "Mobile",
        items: &["React Native", "Expo"],
    },
    TechCategory {
        category: "Styling",
        items: &["Tailwind CSS", "Sass", "CSS"],
    },
    TechCategory {
        category: "Backend",
        items: &["Node.js", "Express", "NestJS"],
    },
    TechCategory {
        category: "Database",
        items: &["MongoDB", "PostgreSQL"],
    },
    TechCategory {
        category: "Dev Tools",
        items: &["Git", "GitHub", "Docker"],
    },
];

/// Contact card profiles
pub const SOCIALS: [Social; 2] = [
    Social {
        id: 1,
        text: "Github",
        icon: "/icons/github.svg",
        bg: "#f4656b",
        link: "https://github.com/amirreza98",
    },
    Social {
        id: 2,
        text: "LinkedIn",
        icon: "/icons/linkedin.svg",
        bg: "#05b6f6",
        link: "https://www.linkedin.com/in/amirrezaazemati/",
    },
];

/// Photos sidebar
pub const PHOTOS_LINKS: [PhotoLink; 5] = [
    PhotoLink {
        id: 1,
        icon: "/icons/gicon1.svg",
        title: "Library",
    },
    PhotoLink {
        id: 2,
        icon: "/icons/gicon2.svg",
        title: "Memories",
    },
    PhotoLink {
        id: 3,
        icon: "/icons/file.svg",
        title: "Places",
    },
    PhotoLink {
        id: 4,
        icon: "/icons/gicon4.svg",
        title: "People",
    },
    PhotoLink {
        id: 5,
        icon: "/icons/gicon5.svg",
        title: "Favorites",
    },
];

/// Photos gallery
pub const GALLERY: [GalleryItem; 4] = [
    GalleryItem {
        id: 1,
        img: "/images/gal1.png",
    },
    GalleryItem {
        id: 2,
        img: "/images/gal2.png",
    },
    GalleryItem {
        id: 3,
        img: "/images/gal3.png",
    },
    GalleryItem {
        id: 4,
        img: "/images/gal4.png",
    },
];

/// Initial window table
#[inline]
#[must_use]
pub fn default_window_config() -> WindowRegistry {
    WindowRegistry::new()
}

// ------------------ FINDER ------------------

/// Kind of file shown in the Finder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Plain text document
    Txt,
    /// Web link
    Url,
    /// Image
    Img,
    /// Design file link
    Fig,
    /// PDF document
    Pdf,
}

impl FileType {
    /// Short tag used in window keys
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Url => "url",
            Self::Img => "img",
            Self::Fig => "fig",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File inside a Finder folder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinderFile {
    /// Id, unique within its folder
    pub id: u32,
    /// Label
    pub name: String,
    /// Icon path
    pub icon: String,
    /// Kind of file
    pub file_type: FileType,
    /// Placement class on the desktop grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Heading for text files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// External link for url/fig files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Image location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Body paragraphs
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
}

impl FinderFile {
    /// New file with no optional fields
    #[must_use]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        icon: impl Into<String>,
        file_type: FileType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            file_type,
            position: None,
            subtitle: None,
            href: None,
            image_url: None,
            description: Vec::new(),
        }
    }

    /// With grid placement
    #[must_use]
    pub fn at(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// With external link
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// With image
    #[must_use]
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// With subtitle
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// With body paragraphs
    #[must_use]
    pub fn with_description<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.description = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Window key derived from file type and kind, e.g. `txtfile`
    #[must_use]
    pub fn window_key(&self) -> String {
        format!("{}file", self.file_type)
    }
}

/// Folder in the Finder tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinderFolder {
    /// Id, unique among its siblings
    pub id: u32,
    /// Label
    pub name: String,
    /// Icon path
    pub icon: String,
    /// Location tag for top-level folders
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
    /// Placement class on the desktop grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Placement class of the folder's own window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_position: Option<String>,
    /// Contents
    pub children: Vec<FinderNode>,
}

impl FinderFolder {
    /// Empty folder
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            location_type: None,
            position: None,
            window_position: None,
            children: Vec::new(),
        }
    }

    /// Mark as a top-level location
    #[must_use]
    pub fn location(mut self, location_type: impl Into<String>) -> Self {
        self.location_type = Some(location_type.into());
        self
    }

    /// With grid placement for the folder icon and its window
    #[must_use]
    pub fn placed(mut self, position: impl Into<String>, window: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self.window_position = Some(window.into());
        self
    }

    /// With contents
    #[must_use]
    pub fn with_children(mut self, children: Vec<FinderNode>) -> Self {
        self.children = children;
        self
    }

    /// Sub-folders, in order
    pub fn folders(&self) -> impl Iterator<Item = &FinderFolder> {
        self.children.iter().filter_map(FinderNode::as_folder)
    }

    /// Files, in order
    pub fn files(&self) -> impl Iterator<Item = &FinderFile> {
        self.children.iter().filter_map(FinderNode::as_file)
    }
}

/// Entry in a Finder folder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FinderNode {
    /// Sub-folder
    Folder(FinderFolder),
    /// File
    File(FinderFile),
}

impl FinderNode {
    /// Id of the entry
    #[must_use]
    pub fn id(&self) -> u32 {
        match self {
            Self::Folder(folder) => folder.id,
            Self::File(file) => file.id,
        }
    }

    /// Label of the entry
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.name,
            Self::File(file) => &file.name,
        }
    }

    /// Folder, if this is one
    #[must_use]
    pub fn as_folder(&self) -> Option<&FinderFolder> {
        match self {
            Self::Folder(folder) => Some(folder),
            Self::File(_) => None,
        }
    }

    /// File, if this is one
    #[must_use]
    pub fn as_file(&self) -> Option<&FinderFile> {
        match self {
            Self::File(file) => Some(file),
            Self::Folder(_) => None,
        }
    }
}

/// Top-level Finder locations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Locations {
    /// Projects
    pub work: FinderFolder,
    /// Personal photos and bio
    pub about: FinderFolder,
    /// Resume document
    pub resume: FinderFolder,
    /// Discarded images
    pub trash: FinderFolder,
}

impl Locations {
    /// Locations in sidebar order
    #[must_use]
    pub fn all(&self) -> [&FinderFolder; 4] {
        [&self.work, &self.about, &self.resume, &self.trash]
    }
}

/// Finder content
pub static LOCATIONS: Lazy<Locations> = Lazy::new(|| Locations {
    work: work_location(),
    about: about_location(),
    resume: resume_location(),
    trash: trash_location(),
});

fn project(
    id: u32,
    name: &str,
    slug: &str,
    placement: (&str, &str),
    summary: [&str; 2],
    demo: &str,
    image: &str,
) -> FinderNode {
    FinderNode::Folder(
        FinderFolder::new(id, name, "/images/folder.png")
            .placed(placement.0, placement.1)
            .with_children(vec![
                FinderNode::File(
                    FinderFile::new(
                        1,
                        format!("{name} Project.txt"),
                        "/images/txt.png",
                        FileType::Txt,
                    )
                    .at("top-5 left-10")
                    .with_description(summary),
                ),
                FinderNode::File(
                    FinderFile::new(2, format!("{slug}.com"), "/images/safari.png", FileType::Url)
                        .at("top-10 right-20")
                        .with_href(demo),
                ),
                FinderNode::File(
                    FinderFile::new(4, format!("{slug}.png"), "/images/image.png", FileType::Img)
                        .at("top-52 right-80")
                        .with_image(image),
                ),
                FinderNode::File(
                    FinderFile::new(5, "Design.fig", "/images/plain.png", FileType::Fig)
                        .at("top-60 right-20")
                        .with_href("https://google.com"),
                ),
            ]),
    )
}

fn work_location() -> FinderFolder {
    FinderFolder::new(1, "Work", "/icons/work.svg")
        .location("work")
        .with_children(vec![
            project(
                5,
                "Nike Ecommerce Website Application",
                "nike",
                ("top-10 left-5", "top-[5vh] left-5"),
                [
                    "The Nike eCommerce website is a sleek and modern platform built with Next.js and Tailwind.",
                    "A high-performance UI with clean responsive design.",
                ],
                "https://youtu.be/fZdTYswuZjU?si=Awjl-pIst9e09_UU",
                "/images/project-1.png",
            ),
            project(
                6,
                "AI Resume Analyzer",
                "ai-resume-analyzer",
                ("top-52 right-80", "top-[20vh] left-7"),
                [
                    "AI-powered resume analyzer built with Next.js & Tailwind.",
                    "Provides instant keyword and format insights.",
                ],
                "https://youtu.be/iYOz165wGkQ?si=R1hs8Legl200m0Cl",
                "/images/project-2.png",
            ),
            project(
                7,
                "Food Delivery App",
                "food-delivery-app",
                ("top-10 left-80", "top-[33vh] left-7"),
                [
                    "Cross-platform food delivery app built with React Native.",
                    "Real-time tracking, smooth UI, and clean UX.",
                ],
                "https://youtu.be/LKrX390fJMw?si=cExkuVhf2DTV9G2-",
                "/images/project-3.png",
            ),
        ])
}

fn about_location() -> FinderFolder {
    FinderFolder::new(2, "About me", "/icons/info.svg")
        .location("about")
        .with_children(vec![
            FinderNode::File(
                FinderFile::new(1, "me.png", "/images/image.png", FileType::Img)
                    .at("top-10 left-5")
                    .with_image("/images/Amir.JPEG"),
            ),
            FinderNode::File(
                FinderFile::new(2, "graduated-me.png", "/images/image.png", FileType::Img)
                    .at("top-28 right-72")
                    .with_image("/images/Amir-2.JPEG"),
            ),
            FinderNode::File(
                FinderFile::new(3, "conference-me.png", "/images/image.png", FileType::Img)
                    .at("top-52 left-80")
                    .with_image("/images/Amir-3.JPG"),
            ),
            FinderNode::File(
                FinderFile::new(4, "about-me.txt", "/images/txt.png", FileType::Txt)
                    .at("top-60 left-5")
                    .with_subtitle("Meet the Developer Behind the Code")
                    .with_image("/images/Amir.JPEG")
                    .with_description([
                        "Hey! I'm Amir Reza, a Full Stack developer.",
                        "I specialize in React, Next.js, and clean UI/UX.",
                        "I love building smooth, fast, interactive experiences.",
                    ]),
            ),
        ])
}

fn resume_location() -> FinderFolder {
    FinderFolder::new(3, "Resume", "/icons/file.svg")
        .location("resume")
        .with_children(vec![FinderNode::File(FinderFile::new(
            1,
            "Resume.pdf",
            "/images/pdf.png",
            FileType::Pdf,
        ))])
}

fn trash_location() -> FinderFolder {
    FinderFolder::new(4, "Trash", "/icons/trash.svg")
        .location("trash")
        .with_children(vec![
            FinderNode::File(
                FinderFile::new(1, "trash1.png", "/images/image.png", FileType::Img)
                    .at("top-10 left-10")
                    .with_image("/images/trash-1.png"),
            ),
            FinderNode::File(
                FinderFile::new(2, "trash2.png", "/images/image.png", FileType::Img)
                    .at("top-40 left-80")
                    .with_image("/images/trash-2.png"),
            ),
        ])
}
