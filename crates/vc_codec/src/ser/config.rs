use crate::grammar::ITEMS_PER_LINE;

/// Options of an [`Encoder`](crate::ser::Encoder).
///
/// # Examples
///
/// ```
/// use vc_codec::EncoderConfig;
///
/// let config = EncoderConfig::new().with_template(true).with_items_per_line(8);
/// assert!(config.template());
/// assert_eq!(config.items_per_line(), 8);
/// assert_eq!(config.placeholder_len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    template: bool,
    items_per_line: usize,
    placeholder_len: usize,
}

impl Default for EncoderConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl EncoderConfig {
    /// Creates the default configuration: no template mode, five items per line.
    #[inline]
    pub const fn new() -> Self {
        Self {
            template: false,
            items_per_line: ITEMS_PER_LINE,
            placeholder_len: ITEMS_PER_LINE,
        }
    }

    /// Enables template mode.
    ///
    /// Absent members are replaced before encoding, so the document shows the
    /// full shape of the type:
    /// - a nested object becomes a default instance,
    /// - a scalar collection becomes [`placeholder_len`](Self::placeholder_len) default items,
    /// - an object collection becomes empty.
    #[inline]
    pub const fn with_template(mut self, template: bool) -> Self {
        self.template = template;
        self
    }

    /// Sets how many scalar collection items share one line. Zero is read as one.
    #[inline]
    pub const fn with_items_per_line(mut self, items: usize) -> Self {
        self.items_per_line = if items == 0 { 1 } else { items };
        self
    }

    /// Sets the length of placeholder scalar collections in template mode.
    #[inline]
    pub const fn with_placeholder_len(mut self, len: usize) -> Self {
        self.placeholder_len = len;
        self
    }

    #[inline]
    pub const fn template(&self) -> bool {
        self.template
    }

    #[inline]
    pub const fn items_per_line(&self) -> usize {
        self.items_per_line
    }

    #[inline]
    pub const fn placeholder_len(&self) -> usize {
        self.placeholder_len
    }
}
