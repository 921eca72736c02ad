//! The site settings singleton and its patch commands.
//!
//! Settings updates are expressed as a tagged-union command per known
//! section, so the compiler checks exhaustiveness instead of a dotted
//! string key being resolved at runtime.

use serde::{Deserialize, Serialize};

// ─── Sections ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
  pub title:    String,
  pub subtitle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
  pub copyright: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutMe {
  pub name:                 String,
  /// URL or embeddable data string produced by the upload collaborator.
  pub photo_url:            String,
  pub bio:                  String,
  pub professional_summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
  pub email:    String,
  pub phone:    String,
  pub facebook: String,
  pub linkedin: String,
  pub location: String,
}

// ─── Singleton ───────────────────────────────────────────────────────────────

/// The deeply nested settings object. A single value, mutated only through
/// [`SettingsPatch`] commands and committed as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettings {
  pub comments_enabled: bool,
  pub ratings_enabled:  bool,
  pub hero_section:     HeroSection,
  pub footer_content:   FooterContent,
  pub about_me:         AboutMe,
  pub contact_details:  ContactDetails,
}

impl Default for AdminSettings {
  /// A fresh site: both visitor features enabled, all copy empty.
  fn default() -> Self {
    Self {
      comments_enabled: true,
      ratings_enabled:  true,
      hero_section:     HeroSection::default(),
      footer_content:   FooterContent::default(),
      about_me:         AboutMe::default(),
      contact_details:  ContactDetails::default(),
    }
  }
}

// ─── Patch commands ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroField {
  Title,
  Subtitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterField {
  Copyright,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutMeField {
  Name,
  PhotoUrl,
  Bio,
  ProfessionalSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
  Email,
  Phone,
  Facebook,
  Linkedin,
  Location,
}

/// One settings edit: a top-level toggle, or a single field inside one
/// section. Applying a patch replaces only the named field and preserves
/// every sibling.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsPatch {
  CommentsEnabled(bool),
  RatingsEnabled(bool),
  Hero(HeroField, String),
  Footer(FooterField, String),
  AboutMe(AboutMeField, String),
  Contact(ContactField, String),
}

impl SettingsPatch {
  pub fn apply(self, settings: &mut AdminSettings) {
    match self {
      Self::CommentsEnabled(on) => settings.comments_enabled = on,
      Self::RatingsEnabled(on) => settings.ratings_enabled = on,
      Self::Hero(field, value) => {
        let section = &mut settings.hero_section;
        match field {
          HeroField::Title => section.title = value,
          HeroField::Subtitle => section.subtitle = value,
        }
      }
      Self::Footer(field, value) => match field {
        FooterField::Copyright => settings.footer_content.copyright = value,
      },
      Self::AboutMe(field, value) => {
        let section = &mut settings.about_me;
        match field {
          AboutMeField::Name => section.name = value,
          AboutMeField::PhotoUrl => section.photo_url = value,
          AboutMeField::Bio => section.bio = value,
          AboutMeField::ProfessionalSummary => {
            section.professional_summary = value
          }
        }
      }
      Self::Contact(field, value) => {
        let section = &mut settings.contact_details;
        match field {
          ContactField::Email => section.email = value,
          ContactField::Phone => section.phone = value,
          ContactField::Facebook => section.facebook = value,
          ContactField::Linkedin => section.linkedin = value,
          ContactField::Location => section.location = value,
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn populated() -> AdminSettings {
    AdminSettings {
      comments_enabled: true,
      ratings_enabled:  false,
      hero_section:     HeroSection {
        title:    "Territory".into(),
        subtitle: "Code and stories".into(),
      },
      footer_content:   FooterContent { copyright: "© 2026".into() },
      about_me:         AboutMe {
        name:                 "S. Author".into(),
        photo_url:            "https://example.com/p.png".into(),
        bio:                  "old bio".into(),
        professional_summary: "summary".into(),
      },
      contact_details:  ContactDetails {
        email:    "a@example.com".into(),
        phone:    "123".into(),
        facebook: "fb".into(),
        linkedin: "li".into(),
        location: "Dhaka".into(),
      },
    }
  }

  #[test]
  fn nested_patch_replaces_only_the_named_field() {
    let before = populated();
    let mut after = before.clone();
    SettingsPatch::AboutMe(AboutMeField::Bio, "X".into()).apply(&mut after);

    assert_eq!(after.about_me.bio, "X");
    // Siblings inside the section and every other section are untouched.
    assert_eq!(after.about_me.name, before.about_me.name);
    assert_eq!(after.about_me.photo_url, before.about_me.photo_url);
    assert_eq!(
      after.about_me.professional_summary,
      before.about_me.professional_summary
    );
    assert_eq!(after.hero_section, before.hero_section);
    assert_eq!(after.footer_content, before.footer_content);
    assert_eq!(after.contact_details, before.contact_details);
    assert_eq!(after.comments_enabled, before.comments_enabled);
    assert_eq!(after.ratings_enabled, before.ratings_enabled);
  }

  #[test]
  fn top_level_toggle_flips_only_itself() {
    let before = populated();
    let mut after = before.clone();
    SettingsPatch::RatingsEnabled(true).apply(&mut after);

    assert!(after.ratings_enabled);
    assert_eq!(after.comments_enabled, before.comments_enabled);
    assert_eq!(after.about_me, before.about_me);
  }
}
