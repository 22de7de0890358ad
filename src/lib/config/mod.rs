use std::{borrow::Cow, time::Duration};

use serde::{Deserialize, Serialize};

use crate::types::{Dir, millis};

/// How long past its publish time a scheduled post is still shown.
pub const SCHEDULED_POST_MARGIN: Duration = Duration::from_millis(15 * 60 * 1000);

/// `<html lang>` used when [`SiteConfig::lang`] is left empty.
pub const DEFAULT_LANG: &str = "en";

/// Site-wide metadata read by the site generator.
///
/// Field names serialize in camelCase, matching the keys the theme's
/// templates look up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub website: Cow<'static, str>,
    pub author: Cow<'static, str>,
    pub author_email: Cow<'static, str>,
    pub profile: Cow<'static, str>,
    pub desc: Cow<'static, str>,
    pub title: Cow<'static, str>,
    pub og_image: Cow<'static, str>,
    pub light_and_dark_mode: bool,
    pub post_per_index: usize,
    pub post_per_page: usize,
    #[serde(with = "millis")]
    pub scheduled_post_margin: Duration,
    pub show_archives: bool,
    // Back link on the post detail page.
    pub show_back_button: bool,
    pub edit_post: EditPost,
    pub dynamic_og_image: bool,
    pub dir: Dir,
    pub lang: Cow<'static, str>,
    // IANA name, e.g. "Europe/London".
    pub timezone: Cow<'static, str>,
}

/// "Edit this post" link shown under each post when enabled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditPost {
    pub enabled: bool,
    pub text: Cow<'static, str>,
    pub url: Cow<'static, str>,
}

impl SiteConfig {
    /// Language code for the `<html lang>` attribute, falling back to
    /// [`DEFAULT_LANG`] when none is configured.
    pub fn html_lang(&self) -> &str {
        if self.lang.is_empty() {
            DEFAULT_LANG
        } else {
            &self.lang
        }
    }
}

pub static SITE: SiteConfig = SiteConfig {
    website: Cow::Borrowed("https://keqichen.github.io"),
    author: Cow::Borrowed("Keqi Chen"),
    author_email: Cow::Borrowed("ckq009@gmail.com"),
    profile: Cow::Borrowed("https://github.com/keqichen"),
    desc: Cow::Borrowed("A minimal, responsive and SEO-friendly Astro blog theme."),
    title: Cow::Borrowed("Keqi's Log"),
    og_image: Cow::Borrowed("astropaper-og.jpg"),
    light_and_dark_mode: true,
    post_per_index: 4,
    post_per_page: 4,
    scheduled_post_margin: SCHEDULED_POST_MARGIN,
    show_archives: true,
    show_back_button: true,
    edit_post: EditPost {
        enabled: false,
        text: Cow::Borrowed("Edit page"),
        // Must track the repository the posts live in.
        url: Cow::Borrowed("https://github.com/keqichen/technical_blog/edit/main/"),
    },
    dynamic_og_image: true,
    dir: Dir::Ltr,
    lang: Cow::Borrowed("en"),
    timezone: Cow::Borrowed("Europe/London"),
};
