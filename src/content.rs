use std::path::Path;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

/// Everything the portfolio pages display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub person: Person,
    pub newsletter: Newsletter,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    pub home: Home,
    pub about: About,
    pub blog: Page,
    pub work: Page,
    pub gallery: Gallery,
}

impl Content {
    /// Load site content from a YAML (or any `config`-supported) file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub email: String,
    /// IANA time zone identifier, e.g. `Europe/Vienna`
    pub location: String,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Newsletter block; `display: false` hides the signup form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Newsletter {
    pub display: bool,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
    pub link: String,
}

/// Metadata shared by every routed page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub path: String,
    pub label: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Home {
    #[serde(flatten)]
    pub page: Page,
    pub image: String,
    pub headline: String,
    pub subline: String,
    pub featured: Featured,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Featured {
    pub display: bool,
    pub title: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    #[serde(flatten)]
    pub page: Page,
    pub table_of_content: TableOfContent,
    pub avatar: Toggle,
    pub calendar: Calendar,
    pub intro: Intro,
    pub work: Section<Experience>,
    pub studies: Section<Institution>,
    pub technical: Section<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableOfContent {
    pub display: bool,
    pub sub_items: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toggle {
    pub display: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    pub display: bool,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intro {
    pub display: bool,
    pub title: String,
    pub description: String,
}

/// A titled list on the about page that can be hidden as a whole
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section<T> {
    pub display: bool,
    pub title: String,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub timeframe: String,
    pub role: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
}

/// Image with an aspect ratio expressed as `width:height`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectImage {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(flatten)]
    pub page: Page,
    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}
