//! Simulated blog feed built from the server's message list.
//!
//! # Design
//! The backend exposes `GET /secondMessages` returning a plain array of
//! strings. Each message is dressed up as a blog post by cycling through
//! canned titles, authors, and categories by index. The
//! fetch half follows the same build/parse split as the employee client; the
//! decoration half is a pure function so it can be tested without a server.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Path of the message feed, relative to the base URL.
const FEED_PATH: &str = "/secondMessages";

const TITLES: [&str; 5] = [
    "Getting Started with React Development",
    "Understanding Spring Boot Architecture",
    "Best Practices for Full-Stack Development",
    "Building Scalable Web Applications",
    "Modern JavaScript Frameworks Comparison",
];

const AUTHORS: [&str; 5] = ["John Doe", "Jane Smith", "Mike Johnson", "Sarah Wilson", "Alex Chen"];

const CATEGORIES: [&str; 5] = ["React", "Spring Boot", "JavaScript", "Web Development", "Tutorial"];

const EXCERPT_FILLER: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
    Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

const CONTENT_FILLER: &str = "This is a detailed blog post about web development. \
    Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor \
    incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis \
    nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. \
    Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore \
    eu fugiat nulla pariatur.";

/// A message decorated into a simulated blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
}

/// Stateless client for the message feed endpoint.
#[derive(Debug, Clone)]
pub struct FeedClient {
    base_url: String,
}

impl FeedClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_messages(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, format!("{}{FEED_PATH}", self.base_url))
    }

    pub fn parse_list_messages(&self, response: HttpResponse) -> Result<Vec<String>, ApiError> {
        if !response.is_success() {
            return Err(ApiError::FetchFailed {
                reason: format!("HTTP {}: {}", response.status, response.body),
            });
        }
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::FetchFailed { reason: format!("response decode failed: {e}") })
    }
}

/// Decorate raw messages into posts: 1-based ids, canned tables cycled by
/// index, the message leading both excerpt and content.
pub fn posts_from_messages(messages: &[String]) -> Vec<Post> {
    messages
        .iter()
        .enumerate()
        .map(|(index, message)| Post {
            id: index as i64 + 1,
            title: TITLES[index % TITLES.len()].to_string(),
            excerpt: format!("{message}. {EXCERPT_FILLER}"),
            content: format!("{message}. {CONTENT_FILLER}"),
            author: AUTHORS[index % AUTHORS.len()].to_string(),
            category: CATEGORIES[index % CATEGORIES.len()].to_string(),
        })
        .collect()
}
