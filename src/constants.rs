// DOM-facing names shared by the wasm front-end.

// Element lookup
pub const DEFAULT_CANVAS_ID: &str = "fx-canvas";
pub const INTERACTIVE_SELECTOR: &str = "a, button, .btn, .interactive";

// Theme tokens read from the root element every frame
pub const TOKEN_PRIMARY: &str = "--primary";
pub const TOKEN_SECONDARY: &str = "--secondary";
pub const TOKEN_BACKGROUND: &str = "--background";

// Canvas configuration attributes
pub const ATTR_BACKGROUND: &str = "data-background";
pub const ATTR_MAX_PARTICLES: &str = "data-max-particles";
pub const ATTR_POINTER: &str = "data-pointer";

// Capability media queries
pub const QUERY_COARSE_POINTER: &str = "(pointer: coarse)";
pub const QUERY_REDUCED_MOTION: &str = "(prefers-reduced-motion: reduce)";

// Overlay stacking (above all page content)
pub const Z_AURA: i32 = 9998;
pub const Z_RING: i32 = 9999;
pub const Z_DOT: i32 = 10000;
