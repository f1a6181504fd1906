mod aggregate;
mod color;
mod records;
