/// The built-in trailing spinner, used when the host supplies no custom
/// loading renderer.
///
/// Stateless, fixed styling. Hosts map it to their platform spinner.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefaultLoadingIndicator {
    /// Spinner diameter, in host units.
    pub spinner_size: f64,
    /// Padding around the spinner.
    pub padding: f64,
    /// Whether the spinner is animating.
    pub animating: bool,
}

impl DefaultLoadingIndicator {
    pub const SPINNER_SIZE: f64 = 20.0;
    pub const PADDING: f64 = 16.0;
}

impl Default for DefaultLoadingIndicator {
    fn default() -> Self {
        Self {
            spinner_size: Self::SPINNER_SIZE,
            padding: Self::PADDING,
            animating: true,
        }
    }
}
