use std::time::Duration;

use super::{ShellError, ShellResult};

pub const AUTOPLAY_DELAY: Duration = Duration::from_millis(5_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub paragraph: &'static str,
    pub background: &'static str,
}

pub static FEATURED_SLIDES: [Slide; 3] = [
    Slide {
        id: 1,
        title: "Featured App",
        subtitle: "The Rise of Remote Work: Benefits, Challenges, and Future Trends",
        paragraph: "The aroma of freshly brewed coffee filled the air, awakening my senses.",
        background: "/images/introSection/cover-4.webp",
    },
    Slide {
        id: 2,
        title: "Featured App",
        subtitle: "Understanding Blockchain Technology: Beyond Cryptocurrency",
        paragraph: "The children giggled with joy as they ran through the sprinklers on a hot summer day.",
        background: "/images/introSection/cover-5.webp",
    },
    Slide {
        id: 3,
        title: "Featured App",
        subtitle: "Mental Health in the Digital Age: Navigating Social Media and Well-being",
        paragraph: "He carefully crafted a beautiful sculpture out of clay, his hands skillfully shaping the intricate details.",
        background: "/images/introSection/cover-6.webp",
    },
];

/// Looping slide position of the welcome carousel.
#[derive(Debug, Clone)]
pub struct Carousel {
    slides: &'static [Slide],
    position: usize,
    since_advance: Duration,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(&FEATURED_SLIDES)
    }
}

impl Carousel {
    pub fn new(slides: &'static [Slide]) -> Self {
        Self {
            slides,
            position: 0,
            since_advance: Duration::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&'static Slide> {
        self.slides.get(self.position)
    }

    pub fn next(&mut self) -> usize {
        if !self.is_empty() {
            self.position = (self.position + 1) % self.len();
        }
        self.since_advance = Duration::ZERO;
        self.position
    }

    pub fn previous(&mut self) -> usize {
        if !self.is_empty() {
            self.position = (self.position + self.len() - 1) % self.len();
        }
        self.since_advance = Duration::ZERO;
        self.position
    }

    pub fn go_to(&mut self, index: usize) -> ShellResult<usize> {
        if index >= self.len() {
            return Err(ShellError::SlideOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.position = index;
        self.since_advance = Duration::ZERO;
        Ok(self.position)
    }

    /// Feeds elapsed time to autoplay; advances once per [`AUTOPLAY_DELAY`].
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.since_advance += elapsed;
        if self.since_advance < AUTOPLAY_DELAY {
            return false;
        }
        self.next();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_wrap_around() {
        let mut carousel = Carousel::default();
        assert_eq!(carousel.len(), 3);
        assert_eq!(carousel.previous(), 2);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.current().map(|s| s.id), Some(1));
    }

    #[test]
    fn go_to_rejects_out_of_range_index() {
        let mut carousel = Carousel::default();
        assert_eq!(carousel.go_to(2), Ok(2));
        assert_eq!(
            carousel.go_to(3),
            Err(ShellError::SlideOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(carousel.position(), 2);
    }

    #[test]
    fn autoplay_advances_after_delay_and_resets_on_interaction() {
        let mut carousel = Carousel::default();
        assert!(!carousel.tick(Duration::from_millis(4_000)));
        carousel.go_to(1).unwrap();
        assert!(!carousel.tick(Duration::from_millis(4_000)));
        assert!(carousel.tick(Duration::from_millis(1_000)));
        assert_eq!(carousel.position(), 2);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut carousel = Carousel::new(&[]);
        assert!(carousel.is_empty());
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.previous(), 0);
        assert!(carousel.current().is_none());
    }
}
