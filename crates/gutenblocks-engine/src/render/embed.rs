use crate::models::RenderNode;
use regex::Regex;
use std::sync::OnceLock;

/// Video provider derived from URL-bearing embed markup.
///
/// The block editor names more provider aliases than the renderer
/// specializes; every alias whose URL is not recognized lands on
/// `Unsupported` and renders as a generic verbatim embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedProvider {
    YouTube { id: String },
    Unsupported,
}

fn youtube_regex() -> &'static Regex {
    static YOUTUBE_REGEX: OnceLock<Regex> = OnceLock::new();
    YOUTUBE_REGEX.get_or_init(|| {
        Regex::new(
            r"(?:https?://)?(?:www\.)?(?:youtube\.com/(?:watch\?v=|embed/)|youtu\.be/)([A-Za-z0-9_-]{11})",
        )
        .expect("invalid youtube url regex")
    })
}

/// Classifies an embed block's markup fragment by the first provider URL
/// found in it.
pub fn classify(markup: &str) -> EmbedProvider {
    match youtube_regex().captures(markup) {
        Some(caps) => EmbedProvider::YouTube {
            id: caps[1].to_string(),
        },
        None => EmbedProvider::Unsupported,
    }
}

/// External embed-player collaborator.
///
/// Given a provider video id, a display height, and a player parameter
/// string, produces the embeddable node. The renderer wraps whatever
/// comes back in its aspect-ratio container.
pub trait EmbedWidget {
    fn embed(&self, video_id: &str, height: u32, params: &str) -> RenderNode;
}

/// Stock widget rendering a privacy-enhanced-mode YouTube iframe.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrivacyIframe;

impl EmbedWidget for PrivacyIframe {
    fn embed(&self, video_id: &str, height: u32, params: &str) -> RenderNode {
        let mut src = format!("https://www.youtube-nocookie.com/embed/{video_id}");
        if !params.is_empty() {
            src.push('?');
            src.push_str(params);
        }
        RenderNode::new(0, "iframe")
            .class("w-full")
            .attr("src", src)
            .attr("height", height.to_string())
            .attr("loading", "lazy")
            .attr("allowfullscreen", "")
    }
}
