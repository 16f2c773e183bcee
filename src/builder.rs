use core::fmt::Write;

use crate::compat::{Cow, String, Vec};
use crate::encode::{QUERY_VALUE_SET, encoded_len, percent_encode_into};

/// Reusable URL builder that assembles a URL from caller-supplied parts.
///
/// Parts are borrowed, not copied: every `&str` handed to a setter is held
/// as a reference until [`build`](UrlBuilder::build) renders it into the
/// output string, so the underlying text must stay alive until then. Owned
/// `String`s are also accepted for values that do not outlive the builder.
///
/// `build` resets the builder, so one instance can produce any number of
/// URLs while the internal part lists keep their allocations:
///
/// ```
/// use urlforge::UrlBuilder;
///
/// let mut builder = UrlBuilder::new();
/// let url = builder
///     .set_scheme("https")
///     .set_hostname("example.com")
///     .append_path_segment("search")
///     .append_query_param("q", "hello world")
///     .build();
/// assert_eq!(url, "https://example.com/search?q=hello%20world");
///
/// // Fresh state, same buffers.
/// let url = builder.set_hostname("localhost").set_port(3000).build();
/// assert_eq!(url, "localhost:3000");
/// ```
///
/// The builder performs no validation: fields are emitted exactly as
/// supplied, in the fixed scheme, hostname, port, path, query, fragment
/// order, each present only when set. All structural separators are
/// inserted by the builder, so parts meant to be atomic should not contain
/// `/`, `?`, `&`, `=` or `#` of their own. Only query parameter *values*
/// are percent-encoded; every other field is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct UrlBuilder<'a> {
    /// The url scheme, without the "://".
    scheme: Cow<'a, str>,
    /// The url hostname, used verbatim.
    hostname: Cow<'a, str>,
    /// The url port. `None` is omitted on render.
    port: Option<u16>,
    /// The path segments in order.
    path_segments: Vec<Cow<'a, str>>,
    /// The query parameters in order, values still unescaped.
    query_params: Vec<(Cow<'a, str>, Cow<'a, str>)>,
    /// The url fragment, without the leading '#'.
    fragment: Cow<'a, str>,
}

impl Default for UrlBuilder<'_> {
    fn default() -> Self {
        Self {
            scheme: Cow::Borrowed(""),
            hostname: Cow::Borrowed(""),
            port: None,
            path_segments: Vec::new(),
            query_params: Vec::new(),
            fragment: Cow::Borrowed(""),
        }
    }
}

impl<'a> UrlBuilder<'a> {
    /// Create an empty builder. No field is required before `build`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scheme, e.g. "http" or "https".
    ///
    /// Do not include the `://`, the builder emits it. An empty string
    /// leaves the scheme unset. Overwrites any previously set scheme.
    pub fn set_scheme(&mut self, scheme: impl Into<Cow<'a, str>>) -> &mut Self {
        self.scheme = scheme.into();
        self
    }

    /// Set the hostname, e.g. "www.example.com".
    ///
    /// The hostname is used verbatim; no `www.` prefix is added or
    /// stripped. An empty string leaves the hostname unset.
    pub fn set_hostname(&mut self, hostname: impl Into<Cow<'a, str>>) -> &mut Self {
        self.hostname = hostname.into();
        self
    }

    /// Set the port. `0` means "no port" and is omitted on render.
    pub fn set_port(&mut self, port: u16) -> &mut Self {
        self.port = (port != 0).then_some(port);
        self
    }

    /// Append one path segment.
    ///
    /// Segments should not contain '/': the builder joins them, so the
    /// path `/test/path/parts` is three calls with "test", "path" and
    /// "parts" in that order.
    pub fn append_path_segment(&mut self, segment: impl Into<Cow<'a, str>>) -> &mut Self {
        self.path_segments.push(segment.into());
        self
    }

    /// Append one query parameter.
    ///
    /// `value` is raw text and is percent-encoded during `build`; `name`
    /// is emitted verbatim. Pairs keep their call order and duplicate
    /// names are not collapsed.
    pub fn append_query_param(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        value: impl Into<Cow<'a, str>>,
    ) -> &mut Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// Set the fragment, without the leading '#' (the builder adds it).
    ///
    /// An empty string leaves the fragment unset. Overwrites any
    /// previously set fragment.
    pub fn set_fragment(&mut self, fragment: impl Into<Cow<'a, str>>) -> &mut Self {
        self.fragment = fragment.into();
        self
    }

    /// Render the accumulated parts into a URL string.
    ///
    /// Fields are emitted in scheme, hostname, port, path, query, fragment
    /// order, each only when set; with nothing set the result is `""`.
    /// A port with no hostname still renders, as `":8080"`. The output is
    /// allocated once, at its exact final size.
    ///
    /// Rendering resets the builder: every field returns to unset and the
    /// next URL starts from a clean slate.
    pub fn build(&mut self) -> String {
        let mut url = String::with_capacity(self.rendered_len());

        if !self.scheme.is_empty() {
            url.push_str(&self.scheme);
            url.push_str("://");
        }
        url.push_str(&self.hostname);
        if let Some(port) = self.port {
            let _ = write!(url, ":{port}");
        }
        for segment in &self.path_segments {
            url.push('/');
            url.push_str(segment);
        }
        for (i, (name, value)) in self.query_params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(name);
            url.push('=');
            percent_encode_into(&mut url, value, QUERY_VALUE_SET);
        }
        if !self.fragment.is_empty() {
            url.push('#');
            url.push_str(&self.fragment);
        }

        self.reset();
        url
    }

    /// Exact length of the rendered url, so `build` allocates once.
    fn rendered_len(&self) -> usize {
        let mut len = 0;
        if !self.scheme.is_empty() {
            len += self.scheme.len() + 3;
        }
        len += self.hostname.len();
        if let Some(port) = self.port {
            len += 1 + decimal_len(port);
        }
        for segment in &self.path_segments {
            len += 1 + segment.len();
        }
        for (name, value) in &self.query_params {
            len += 2 + name.len() + encoded_len(value, QUERY_VALUE_SET);
        }
        if !self.fragment.is_empty() {
            len += 1 + self.fragment.len();
        }
        len
    }

    /// Reset all fields to unset for the next url. The part lists are
    /// cleared in place so their buffers carry over to the next build.
    fn reset(&mut self) {
        self.scheme = Cow::Borrowed("");
        self.hostname = Cow::Borrowed("");
        self.port = None;
        self.path_segments.clear();
        self.query_params.clear();
        self.fragment = Cow::Borrowed("");
    }
}

/// Number of decimal digits in `port`.
fn decimal_len(port: u16) -> usize {
    match port {
        0..=9 => 1,
        10..=99 => 2,
        100..=999 => 3,
        1000..=9999 => 4,
        _ => 5,
    }
}
