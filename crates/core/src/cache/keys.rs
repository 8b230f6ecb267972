/// The single key under which the whole catalog is cached.
///
/// The catalog is stored as one blob; there are no per-product keys, so
/// nothing finer-grained than the full listing can be hit or expired.
pub const PRODUCTS_ALL_KEY: &str = "products:all";
