#[derive(Clone, Debug, PartialEq)]
pub struct Vec2D<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Vec2D<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Vec2D<T> {
        Vec2D {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }
    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }

    /// Reallocates for a new viewport size. Returns whether the size changed.
    /// Contents are reset to `fill_value` when it does.
    pub fn resize(&mut self, width: usize, height: usize, fill_value: T) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        self.buffer.clear();
        self.buffer.resize(width * height, fill_value);
        self.width = width;
        self.height = height;
        true
    }
}

impl<T> Vec2D<T> {
    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_indexing() {
        let mut film = Vec2D::new(3, 2, 0u32);
        film.buffer[5] = 7;
        assert_eq!(film.at(2, 1), 7);
        assert_eq!(film.total_pixels(), 6);
    }

    #[test]
    fn test_resize() {
        let mut film = Vec2D::new(100, 100, 1u32);
        assert!(!film.resize(100, 100, 0));
        assert_eq!(film.at(0, 0), 1);
        assert!(film.resize(200, 150, 0));
        assert_eq!(film.buffer.len(), 200 * 150);
        assert_eq!((film.width, film.height), (200, 150));
        assert!(film.buffer.iter().all(|&p| p == 0));
    }
}
