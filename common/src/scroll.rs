// active section tracking
//
// the tracker only keeps the id of the section it last reported; every update is
// recomputed from the current layout, which is why redundant events can be dropped

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    last_active: Option<String>,
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        ScrollTracker {
            threshold,
            last_active: None,
        }
    }

    pub fn last_active(&self) -> Option<&str> {
        self.last_active.as_deref()
    }

    // feed the current viewport tops of all sections, in document order
    //
    // returns the id of the section that just became active, or None when nothing
    // changed (including when no section has reached the threshold yet)
    pub fn update<I, S>(&mut self, tops: I) -> Option<String>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let current = current_section(tops, self.threshold)?;

        if self.last_active.as_deref() == Some(current.as_str()) {
            return None;
        }

        self.last_active = Some(current.clone());
        Some(current)
    }
}

// the lowest section in document order whose top edge is at or above the threshold
pub fn current_section<I, S>(tops: I, threshold: f64) -> Option<String>
where
    I: IntoIterator<Item = (S, f64)>,
    S: AsRef<str>,
{
    tops.into_iter()
        .filter(|(_, top)| *top <= threshold)
        .last()
        .map(|(id, _)| id.as_ref().to_owned())
}

// measurements of the nav strip and one of its links
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavGeometry {
    pub nav_offset_left: f64,
    pub nav_width: f64,
    pub link_offset_left: f64,
    pub link_width: f64,
}

impl NavGeometry {
    // horizontal scroll position that puts the link in the middle of the strip
    pub fn centered_scroll_left(&self) -> f64 {
        let offset = self.link_offset_left - self.nav_offset_left;

        offset - (self.nav_width / 2.0 - self.link_width / 2.0)
    }
}
