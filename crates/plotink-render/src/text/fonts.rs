use std::collections::HashMap;
use std::fmt;

/// Error returned by [`FontStore::register_face`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Cache key for font and shaper resources.
///
/// Two descriptors are equal iff family and weight match exactly; the weight
/// is compared numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontDescriptor {
    pub family: String,
    pub weight: u16,
}

impl FontDescriptor {
    pub fn new(family: &str, weight: u16) -> Self {
        Self {
            family: family.to_owned(),
            weight,
        }
    }
}

/// Vertical metrics of a font at a concrete pixel size.
///
/// y-down convention: `ascent` and `descent` are both positive distances
/// from the baseline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_height: f32,
}

impl FontMetrics {
    /// Estimated metrics used when no font face can be resolved at all, so
    /// that text measurement stays non-degenerate.
    pub fn synthetic(px_size: f32) -> Self {
        Self {
            ascent: px_size * 0.8,
            descent: px_size * 0.2,
            line_height: px_size * 1.2,
        }
    }
}

/// Conventional name for a numeric font weight, used to derive embedded
/// resource filenames (`{family}-{WeightName}.ttf`).
pub fn weight_name(weight: u16) -> &'static str {
    match weight {
        100 => "Thin",
        200 => "ExtraLight",
        300 => "Light",
        400 => "Regular",
        500 => "Medium",
        600 => "SemiBold",
        700 => "Bold",
        800 => "ExtraBold",
        900 => "Black",
        _ => "Regular",
    }
}

/// Owns every font face available to the render context and remembers the
/// outcome of each descriptor lookup.
///
/// Resolution happens at most once per distinct descriptor; the result
/// (including a negative one) is cached until [`FontStore::clear`]. A
/// descriptor that matches nothing degrades through embedded resources and
/// the default face — a missing font never fails a draw call.
pub struct FontStore {
    faces: Vec<fontdue::Font>,
    registered: Vec<(FontDescriptor, FontId)>,
    /// Lower-cased resource filename -> raw font bytes.
    embedded: Vec<(String, Vec<u8>)>,
    resolved: HashMap<FontDescriptor, Option<FontId>>,
    default_face: Option<FontId>,
}

impl FontStore {
    pub fn new() -> Self {
        Self {
            faces: Vec::new(),
            registered: Vec::new(),
            embedded: Vec::new(),
            resolved: HashMap::new(),
            default_face: None,
        }
    }

    /// Parses and stores a TrueType/OpenType face for the given family and
    /// weight. The first registered face becomes the default fallback.
    pub fn register_face(
        &mut self,
        family: &str,
        weight: u16,
        bytes: &[u8],
    ) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.faces.len());
        self.faces.push(font);

        let descriptor = FontDescriptor::new(family, weight);
        self.registered.push((descriptor.clone(), id));
        self.resolved.insert(descriptor, Some(id));
        if self.default_face.is_none() {
            self.default_face = Some(id);
        }
        Ok(id)
    }

    /// Adds an embedded font resource that resolution may fall back to when
    /// a requested family has no registered face. `name` is the resource
    /// filename, matched case-insensitively by suffix.
    pub fn add_embedded(&mut self, name: &str, bytes: Vec<u8>) {
        self.embedded.push((name.to_lowercase(), bytes));
    }

    pub fn set_default_face(&mut self, id: FontId) {
        self.default_face = Some(id);
    }

    /// Looks up (or establishes, exactly once) the face for a descriptor.
    ///
    /// Order: cached outcome, exact family+weight, same family with nearest
    /// weight, embedded `{family}-{WeightName}.ttf` then `{family}.ttf`,
    /// default face, none.
    pub fn resolve(&mut self, descriptor: &FontDescriptor) -> Option<FontId> {
        if let Some(hit) = self.resolved.get(descriptor) {
            return *hit;
        }
        let outcome = self.resolve_uncached(descriptor);
        self.resolved.insert(descriptor.clone(), outcome);
        outcome
    }

    fn resolve_uncached(&mut self, descriptor: &FontDescriptor) -> Option<FontId> {
        if let Some((_, id)) = self
            .registered
            .iter()
            .find(|(d, _)| *d == *descriptor)
        {
            return Some(*id);
        }

        // Same family, nearest weight.
        if let Some((d, id)) = self
            .registered
            .iter()
            .filter(|(d, _)| d.family.eq_ignore_ascii_case(&descriptor.family))
            .min_by_key(|(d, _)| d.weight.abs_diff(descriptor.weight))
        {
            log::warn!(
                "font '{}' weight {} not registered, substituting weight {}",
                descriptor.family,
                descriptor.weight,
                d.weight
            );
            return Some(*id);
        }

        if let Some(id) = self.load_embedded(descriptor) {
            return Some(id);
        }

        if let Some(id) = self.default_face {
            log::warn!(
                "font '{}' could not be resolved, falling back to the default face",
                descriptor.family
            );
            return Some(id);
        }

        log::warn!(
            "font '{}' could not be resolved and no default face is registered; \
             using estimated metrics",
            descriptor.family
        );
        None
    }

    fn load_embedded(&mut self, descriptor: &FontDescriptor) -> Option<FontId> {
        let with_weight = format!(
            "{}-{}.ttf",
            descriptor.family,
            weight_name(descriptor.weight)
        )
        .to_lowercase();
        let family_only = format!("{}.ttf", descriptor.family).to_lowercase();

        let entry = self
            .embedded
            .iter()
            .find(|(name, _)| name.ends_with(&with_weight))
            .or_else(|| self.embedded.iter().find(|(name, _)| name.ends_with(&family_only)))?;

        match fontdue::Font::from_bytes(entry.1.as_slice(), fontdue::FontSettings::default()) {
            Ok(font) => {
                let id = FontId(self.faces.len());
                log::debug!("loaded embedded font resource '{}'", entry.0);
                self.faces.push(font);
                Some(id)
            }
            Err(e) => {
                log::warn!("embedded font resource '{}' failed to parse: {e}", entry.0);
                None
            }
        }
    }

    /// Returns the parsed face behind a handle, if the handle is valid.
    pub fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.faces.get(id.0)
    }

    /// Vertical metrics for the face at the given device pixel size.
    pub fn line_metrics(&self, id: FontId, px_size: f32) -> Option<FontMetrics> {
        let lm = self.get(id)?.horizontal_line_metrics(px_size)?;
        Some(FontMetrics {
            ascent: lm.ascent,
            // fontdue reports descent as a negative offset from the baseline.
            descent: -lm.descent,
            line_height: lm.new_line_size,
        })
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of descriptors whose resolution outcome has been cached.
    pub fn cached_descriptor_count(&self) -> usize {
        self.resolved.len()
    }

    /// Releases every cached face and lookup outcome. Safe to call more than
    /// once.
    pub fn clear(&mut self) {
        self.faces.clear();
        self.registered.clear();
        self.embedded.clear();
        self.resolved.clear();
        self.default_face = None;
    }
}

impl Default for FontStore {
    fn default() -> Self {
        Self::new()
    }
}
