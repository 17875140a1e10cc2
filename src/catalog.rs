use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::overlay::{MediaItem, MediaKind};

pub const CATALOG_FILE: &str = "portfolio.json";

static GLOBAL_CATALOG: LazyLock<Result<Catalog, CatalogError>> =
    LazyLock::new(|| Catalog::load(CATALOG_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Content file is not valid UTF-8")]
    Encoding,
    #[error("Couldn't parse content catalog: {0}")]
    ParseError(String),
    #[error("Media item in {0} has an empty source")]
    EmptySource(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub icon: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub brand: String,
    pub headline: Vec<String>,
    pub photo: String,
    pub cv: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl Profile {
    /// The CV as a previewable document.
    pub fn cv_gallery(&self) -> Vec<MediaItem> {
        vec![MediaItem {
            src: self.cv.clone(),
            kind: MediaKind::Document,
            alt: format!("{} CV", self.name),
            caption: Some("Curriculum Vitae".to_string()),
            description: None,
        }]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub title: String,
    pub value: String,
    pub subtitle: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub logo: String,
    pub link: String,
    pub period: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub year: String,
    #[serde(default)]
    pub notes: Vec<String>,
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub link: String,
    #[serde(default)]
    pub images: Vec<MediaItem>,
}

impl Project {
    pub fn gallery(&self) -> Vec<MediaItem> {
        self.images.clone()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub publication: String,
    pub date: String,
    pub link: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Publication {
    pub fn gallery(&self) -> Vec<MediaItem> {
        vec![MediaItem::image(&self.image, &self.title).with_caption(&self.publication)]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub link: String,
    pub logo: String,
}

impl Certificate {
    /// Verification pages can't be embedded, so they preview as a link.
    pub fn gallery(&self) -> Vec<MediaItem> {
        vec![MediaItem {
            src: self.link.clone(),
            kind: MediaKind::ExternalLink,
            alt: self.title.clone(),
            caption: Some(self.title.clone()),
            description: Some(format!("Issued by {} ({})", self.issuer, self.date)),
        }]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub organization: String,
    pub description: String,
    pub date: String,
    pub category: String,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub special: bool,
}

impl Award {
    pub fn gallery(&self) -> Vec<MediaItem> {
        self.images
            .iter()
            .map(|src| MediaItem::image(src, &self.title).with_caption(&self.title))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub awards: Vec<Award>,
    pub contact: Contact,
}

impl Catalog {
    /// Loads and validates an embedded content file.
    pub fn load(name: &str) -> Result<Self, CatalogError> {
        let file = Assets::get(name).ok_or_else(|| CatalogError::NotFound(name.to_string()))?;
        let content = std::str::from_utf8(&file.data).map_err(|_| CatalogError::Encoding)?;
        Self::from_json(content)
    }

    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            serde_json::from_str(content).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Image and document items must point somewhere.
    fn validate(&self) -> Result<(), CatalogError> {
        let galleries = self
            .projects
            .iter()
            .map(|p| (&p.title, p.gallery()))
            .chain(self.publications.iter().map(|p| (&p.title, p.gallery())))
            .chain(self.awards.iter().map(|a| (&a.title, a.gallery())))
            .chain(std::iter::once((&self.profile.name, self.profile.cv_gallery())));
        for (owner, items) in galleries {
            let empty = items
                .iter()
                .any(|i| i.kind != MediaKind::ExternalLink && i.src.trim().is_empty());
            if empty {
                return Err(CatalogError::EmptySource(owner.clone()));
            }
        }
        Ok(())
    }
}

/// The site's content, parsed once per process.
pub fn catalog() -> Result<&'static Catalog, CatalogError> {
    GLOBAL_CATALOG.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "profile": {
            "name": "Test Person",
            "brand": "Test",
            "headline": ["One", "Two"],
            "photo": "me.jpg",
            "cv": "cv.pdf"
        },
        "contact": { "email": "a@b.c", "phone": "1", "location": "Here" }
    }"#;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = catalog().expect("embedded catalog should parse");
        assert!(!catalog.profile.name.is_empty());
        assert_eq!(catalog.experience.len(), 3);
        assert_eq!(catalog.education.len(), 4);
        assert_eq!(catalog.certificates.len(), 5);
        assert_eq!(catalog.awards.iter().filter(|a| a.special).count(), 1);
    }

    #[test]
    fn test_minimal_catalog_defaults() {
        let catalog = Catalog::from_json(MINIMAL).unwrap();
        assert!(catalog.projects.is_empty());
        assert!(catalog.profile.socials.is_empty());
        assert_eq!(catalog.profile.cv_gallery()[0].kind, MediaKind::Document);
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::load("nope.json").unwrap_err();
        assert_eq!(err, CatalogError::NotFound("nope.json".to_string()));
    }

    #[test]
    fn test_malformed_json() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::ParseError(_)));
    }

    #[test]
    fn test_empty_image_source_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(MINIMAL).unwrap();
        value["projects"] = serde_json::json!([{
            "title": "Broken",
            "description": "",
            "link": "https://example.com",
            "images": [{ "src": "  ", "type": "image" }]
        }]);
        let err = Catalog::from_json(&value.to_string()).unwrap_err();
        assert_eq!(err, CatalogError::EmptySource("Broken".to_string()));
    }

    #[test]
    fn test_award_gallery() {
        let catalog = catalog().unwrap();
        let award = catalog
            .awards
            .iter()
            .find(|a| !a.images.is_empty())
            .expect("one award has images");
        let items = award.gallery();
        assert_eq!(items.len(), award.images.len());
        assert!(items.iter().all(|i| i.kind == MediaKind::Image));
        assert!(items.iter().all(|i| i.title() == award.title));

        let plain = catalog.awards.iter().find(|a| a.images.is_empty()).unwrap();
        assert!(plain.gallery().is_empty());
    }

    #[test]
    fn test_publication_gallery_uses_venue_caption() {
        let catalog = catalog().unwrap();
        let publication = &catalog.publications[0];
        let items = publication.gallery();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].src, publication.image);
        assert_eq!(items[0].alt, publication.title);
        assert_eq!(items[0].title(), publication.publication);
    }

    #[test]
    fn test_certificate_gallery_is_external() {
        let catalog = catalog().unwrap();
        let cert = &catalog.certificates[0];
        let items = cert.gallery();
        assert_eq!(items[0].kind, MediaKind::ExternalLink);
        assert_eq!(items[0].src, cert.link);
    }
}
