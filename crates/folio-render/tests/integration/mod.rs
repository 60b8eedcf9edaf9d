mod properties;
mod rendering;
