use super::types::{Rendered, RenderedContent, ShapedAttributes, ShapedGig};
use crate::storage::records::GigRecord;

/// Converts a stored gig into its public representation.
pub trait ShapeConverter: Send + Sync {
    fn to_public(&self, gig: &GigRecord) -> ShapedGig;
}

/// The REST collection shape used for gigs everywhere else in the API.
#[derive(Debug, Clone)]
pub struct RestShape {
    site_url: String,
}

impl RestShape {
    pub fn new(site_url: &str) -> Self {
        Self {
            site_url: site_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn link(&self, gig: &GigRecord) -> String {
        if gig.slug.is_empty() {
            format!("{}/?p={}", self.site_url, gig.id)
        } else {
            format!("{}/gig/{}/", self.site_url, gig.slug)
        }
    }
}

impl ShapeConverter for RestShape {
    fn to_public(&self, gig: &GigRecord) -> ShapedGig {
        ShapedGig {
            id: gig.id,
            date: gig.date.clone(),
            slug: gig.slug.clone(),
            status: gig.status,
            post_type: "gig".to_string(),
            link: self.link(gig),
            title: Rendered {
                rendered: gig.title.clone(),
            },
            content: RenderedContent {
                rendered: gig.content.clone(),
                protected: false,
            },
            excerpt: RenderedContent {
                rendered: gig.excerpt.clone(),
                protected: false,
            },
            acf: ShapedAttributes {
                venue_name: gig.attributes.venue_name.clone(),
                city: gig.attributes.city.clone(),
                country: gig.attributes.country.clone(),
                songs: gig.attributes.songs.iter().map(|song| song.id()).collect(),
            },
        }
    }
}
