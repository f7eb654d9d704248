//! Card layout assignment.
//!
//! Articles are laid out in blocks of [`TEMPLATE_LEN`]. At the start of every
//! block a template is drawn from [`TEMPLATES`] and each article in the block
//! takes the view type at its position in that template.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Article, Episode, EpisodeLayout, ViewType};

pub const TEMPLATE_LEN: usize = 10;

use ViewType::*;

pub const TEMPLATES: [[ViewType; TEMPLATE_LEN]; 6] = [
    [Hero, Standard, Standard, Compact, ThumbnailLeft, ThumbnailLeft, ThumbnailRight, TextOnly, Wide, Compact],
    [Opinion, Standard, Compact, Compact, Feature, ThumbnailLeft, ThumbnailRight, Brief, Minimal, TextOnly],
    [Hero, ThumbnailLeft, ThumbnailRight, ThumbnailLeft, ThumbnailRight, Gallery, Gallery, Compact, Compact, Standard],
    [Feature, TextOnly, TextOnly, Opinion, Standard, Standard, Wide, Brief, Brief, Minimal],
    [Wide, Compact, Compact, Compact, Hero, ThumbnailRight, ThumbnailRight, ThumbnailLeft, ThumbnailLeft, Gallery],
    [Gallery, Gallery, Standard, Opinion, TextOnly, Brief, Minimal, Feature, Compact, Standard],
];

/// Source of template choices.
pub trait TemplateSource {
    /// Return an index in `0..count`; larger values wrap.
    fn next_index(&mut self, count: usize) -> usize;
}

/// Uniformly random template choice.
pub struct RandomTemplates {
    rng: StdRng,
}

impl RandomTemplates {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSource for RandomTemplates {
    fn next_index(&mut self, count: usize) -> usize {
        self.rng.gen_range(0..count)
    }
}

/// Replays a fixed sequence of template indices, wrapping at the end.
pub struct SequenceTemplates {
    indices: Vec<usize>,
    position: usize,
}

impl SequenceTemplates {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            position: 0,
        }
    }
}

impl TemplateSource for SequenceTemplates {
    fn next_index(&mut self, count: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.position % self.indices.len()];
        self.position += 1;
        index % count
    }
}

pub struct ViewTypeAssigner<S = RandomTemplates> {
    source: S,
}

impl ViewTypeAssigner<RandomTemplates> {
    pub fn new() -> Self {
        Self::with_source(RandomTemplates::new())
    }
}

impl Default for ViewTypeAssigner<RandomTemplates> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TemplateSource> ViewTypeAssigner<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn assign(&mut self, articles: &mut [Article]) {
        for block in articles.chunks_mut(TEMPLATE_LEN) {
            let template = &TEMPLATES[self.source.next_index(TEMPLATES.len()) % TEMPLATES.len()];
            for (article, view_type) in block.iter_mut().zip(template) {
                article.view_type = Some(*view_type);
            }
        }
    }
}

/// Mark the newest episode as `Latest` and the rest as `Archive`.
pub fn assign_episodes(episodes: &mut [Episode]) {
    for (i, episode) in episodes.iter_mut().enumerate() {
        if i == 0 {
            episode.layout = Some(EpisodeLayout::Latest);
            episode.expanded = true;
        } else {
            episode.layout = Some(EpisodeLayout::Archive);
        }
    }
}
