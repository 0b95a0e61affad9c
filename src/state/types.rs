//! Core value types used by Dashsea state.

/// A published blog post as reported by the API.
///
/// This is the one shape used everywhere: list rows, search results, and the
/// detail overlay. Posts are immutable on the client; Dashsea only ever reads
/// content produced elsewhere.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BlogPost {
    /// Unique numeric identifier.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Stored rich-text body (HTML markup, rendered as plain text).
    pub content: String,
    /// Featured image URL when the post has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Creation timestamp (ISO-8601 string as reported by the API).
    pub created_at: String,
    /// Last-update timestamp (ISO-8601 string).
    pub updated_at: String,
    /// Author display name (may be empty).
    pub author: String,
    /// Category name (may be empty for uncategorized posts).
    pub category: String,
    /// Unique URL-safe identifier used for direct-link resolution.
    pub slug: String,
    /// Server-rendered plain-text excerpt when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

/// A post category; read-only reference data used to filter the Blogs view.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Category {
    /// Unique numeric identifier.
    pub id: i64,
    /// Display name, also the value of the `?category=` filter parameter.
    pub name: String,
}

/// Search query sent to the background search worker.
#[derive(Clone, Debug)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Raw query text entered by the user.
    pub text: String,
}

/// Results corresponding to a prior [`QueryInput`].
#[derive(Clone, Debug)]
pub struct SearchResults {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Matching posts in server rank order.
    pub items: Vec<BlogPost>,
}

/// Request consumed by the posts worker.
#[derive(Clone, Debug)]
pub enum PostsRequest {
    /// Home feed: the newest published posts.
    Recent,
    /// Full listing, optionally filtered to a single category name.
    All {
        /// Category filter; `None` restores the unfiltered list.
        category: Option<String>,
    },
}

/// Response from the posts worker, echoing the originating request.
#[derive(Clone, Debug)]
pub struct PostsResponse {
    /// Request this response answers.
    pub request: PostsRequest,
    /// Fetched posts (empty on any fetch or shape failure).
    pub posts: Vec<BlogPost>,
    /// Human-readable fetch errors, if any.
    pub errors: Vec<String>,
}

/// Contact form input fields; transient, cleared after a successful send.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ContactForm {
    /// Sender name (required, min 2 chars).
    pub name: String,
    /// Sender email (required, must look like an address).
    pub email: String,
    /// Message subject.
    pub subject: String,
    /// Message body (required, min 10 chars).
    pub message: String,
    /// Optional phone number.
    pub phone: String,
    /// Optional company name.
    pub company: String,
}

/// Fields of the contact form, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// Sender name.
    Name,
    /// Sender email address.
    Email,
    /// Optional phone number.
    Phone,
    /// Optional company name.
    Company,
    /// Message subject.
    Subject,
    /// Message body.
    Message,
}

impl ContactField {
    /// All fields in the order the form presents them.
    pub const ORDER: [Self; 6] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Company,
        Self::Subject,
        Self::Message,
    ];

    /// Return the field after this one, wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    /// Return the field before this one, wrapping at the start.
    #[must_use]
    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Label shown next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone (optional)",
            Self::Company => "Company (optional)",
            Self::Subject => "Subject",
            Self::Message => "Your Message",
        }
    }
}

/// Outcome of a contact submission as reported by the contact worker.
#[derive(Clone, Debug)]
pub struct ContactOutcome {
    /// `Ok(message)` on success; `Err(message)` with the server-reported or
    /// generic error text on failure.
    pub result: Result<String, String>,
}

/// Which top-level page is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Landing page with the recent-posts feed.
    Home,
    /// Full post listing with category filter.
    Blogs,
    /// Static page describing the blog.
    About,
    /// Contact form.
    Contact,
}

impl View {
    /// Views in tab order.
    pub const ORDER: [Self; 4] = [Self::Home, Self::Blogs, Self::About, Self::Contact];

    /// Tab title shown in the header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Blogs => "Blogs",
            Self::About => "About us",
            Self::Contact => "Contact",
        }
    }

    /// Next view in tab order, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|v| *v == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    /// Previous view in tab order, wrapping.
    #[must_use]
    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|v| *v == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Parse a view from its settings key.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(View)` on a recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "home" => Some(Self::Home),
            "blogs" | "posts" => Some(Self::Blogs),
            "about" => Some(Self::About),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactField, View};

    #[test]
    /// What: View tab order wraps in both directions and keys parse with aliases
    ///
    /// - Input: Each view plus known and unknown config keys
    /// - Output: Cyclic next/prev; correct parse results; None for unknown
    fn view_order_and_config_keys() {
        assert_eq!(View::Contact.next(), View::Home);
        assert_eq!(View::Home.prev(), View::Contact);
        assert_eq!(View::from_config_key("blogs"), Some(View::Blogs));
        assert_eq!(View::from_config_key("posts"), Some(View::Blogs));
        assert_eq!(View::from_config_key("HOME"), Some(View::Home));
        assert_eq!(View::from_config_key("garage"), None);
    }

    #[test]
    /// What: Contact field traversal visits all six fields cyclically
    ///
    /// - Input: Starting field iterated forward six times
    /// - Output: Returns to the start; prev of the first wraps to the last
    fn contact_field_traversal_wraps() {
        let mut f = ContactField::Name;
        for _ in 0..ContactField::ORDER.len() {
            f = f.next();
        }
        assert_eq!(f, ContactField::Name);
        assert_eq!(ContactField::Name.prev(), ContactField::Message);
    }
}
