use std::ops::Range;

/// Size bounds for generated boards.
///
/// Interior widths are drawn from `min_width..max_width` and heights from
/// `min_height..max_height` (upper bounds exclusive). When the drawn area is
/// odd the height is raised by one, so a board may be one row taller than
/// `max_height - 1`.
///
/// # Examples
///
/// ```
/// use tilelink_generator::BoardConfig;
///
/// let config = BoardConfig::new().with_width(4..6).with_height(3..4);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.width_range(), 4..6);
///
/// assert!(BoardConfig::new().with_width(5..5).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Smallest interior width.
    pub min_width: usize,
    /// Exclusive upper bound of the interior width.
    pub max_width: usize,
    /// Smallest interior height.
    pub min_height: usize,
    /// Exclusive upper bound of the interior height, before the parity bump.
    pub max_height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            min_width: 6,
            max_width: 8,
            min_height: 10,
            max_height: 14,
        }
    }
}

impl BoardConfig {
    /// Creates a configuration with the default bounds (`6..8` by `10..14`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the interior width range.
    #[must_use]
    pub fn with_width(mut self, width: Range<usize>) -> Self {
        self.min_width = width.start;
        self.max_width = width.end;
        self
    }

    /// Sets the interior height range.
    #[must_use]
    pub fn with_height(mut self, height: Range<usize>) -> Self {
        self.min_height = height.start;
        self.max_height = height.end;
        self
    }

    /// Returns the interior width range.
    #[must_use]
    pub fn width_range(&self) -> Range<usize> {
        self.min_width..self.max_width
    }

    /// Returns the interior height range.
    #[must_use]
    pub fn height_range(&self) -> Range<usize> {
        self.min_height..self.max_height
    }

    /// Checks that both ranges are non-empty and never yield a zero size.
    ///
    /// # Errors
    ///
    /// Returns the first problem found as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_width == 0 || self.min_height == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.min_width >= self.max_width {
            return Err(ConfigError::EmptyWidthRange {
                min: self.min_width,
                max: self.max_width,
            });
        }
        if self.min_height >= self.max_height {
            return Err(ConfigError::EmptyHeightRange {
                min: self.min_height,
                max: self.max_height,
            });
        }
        Ok(())
    }
}

/// Problems found by [`BoardConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The width range holds no value.
    #[display("empty width range {min}..{max}")]
    EmptyWidthRange {
        /// Smallest width.
        min: usize,
        /// Exclusive upper bound.
        max: usize,
    },
    /// The height range holds no value.
    #[display("empty height range {min}..{max}")]
    EmptyHeightRange {
        /// Smallest height.
        min: usize,
        /// Exclusive upper bound.
        max: usize,
    },
    /// A range allows boards without any tile.
    #[display("board sizes must be at least 1")]
    ZeroSize,
}
