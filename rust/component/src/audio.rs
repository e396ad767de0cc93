//! Types and utilities for the host's audio busses.
//!
//! The host hands each algorithm a single block of memory holding every bus,
//! one after the other. Each bus is a contiguous run of `num_frames` samples,
//! so bus `n` (1-based) starts at `(n - 1) * num_frames`.
//!
//! Both control voltages and audio travel on the same busses, in volts.


/// The number of busses the host provides.
pub const NUM_BUSSES: usize = 28;

/// A 1-based reference to one of the host's busses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusIndex(u8);

impl BusIndex {
    /// Create a bus index from the 1-based bus number.
    ///
    /// Returns `None` for `0`, which the host uses to mean "not connected",
    /// and for numbers beyond [`NUM_BUSSES`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use nt303_component::audio::BusIndex;
    /// assert!(BusIndex::new(0).is_none());
    /// assert_eq!(BusIndex::new(13).map(BusIndex::number), Some(13));
    /// ```
    #[must_use]
    pub fn new(number: usize) -> Option<Self> {
        if (1..=NUM_BUSSES).contains(&number) {
            u8::try_from(number).ok().map(Self)
        } else {
            None
        }
    }

    /// The 1-based bus number.
    #[must_use]
    pub fn number(self) -> usize {
        usize::from(self.0)
    }

    fn offset(self) -> usize {
        self.number() - 1
    }
}

/// How an algorithm's output is combined with what is already on its bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Mix the output into the bus.
    Add,

    /// Overwrite the bus with the output.
    Replace,
}

/// A mutable view of all of the host's busses for one block.
#[derive(Debug)]
pub struct Busses<'a> {
    frames: &'a mut [f32],
    num_frames: usize,
}

impl<'a> Busses<'a> {
    /// Wrap the host's bus memory.
    ///
    /// Returns `None` if `frames` does not hold a whole number of busses.
    #[must_use]
    pub fn new(frames: &'a mut [f32], num_frames: usize) -> Option<Self> {
        if num_frames != 0 && frames.len() % num_frames != 0 {
            return None;
        }
        Some(Self { frames, num_frames })
    }

    /// The number of frames in each bus.
    #[must_use]
    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// The number of busses present in this block.
    #[must_use]
    pub fn num_busses(&self) -> usize {
        if self.num_frames == 0 {
            0
        } else {
            self.frames.len() / self.num_frames
        }
    }

    /// Returns `bus` if it is present in this block.
    #[must_use]
    pub fn present(&self, bus: Option<BusIndex>) -> Option<BusIndex> {
        bus.filter(|bus| bus.number() <= self.num_busses())
    }

    /// Get all samples of a bus.
    ///
    /// # Panics
    ///
    /// Panics if `bus` is not present in this block.
    #[must_use]
    pub fn bus(&self, bus: BusIndex) -> &[f32] {
        let start = bus.offset() * self.num_frames;
        &self.frames[start..start + self.num_frames]
    }

    /// Read a single sample.
    ///
    /// # Panics
    ///
    /// Panics if `bus` is not present or `frame` is out of range.
    #[must_use]
    pub fn sample(&self, bus: BusIndex, frame: usize) -> f32 {
        assert!(frame < self.num_frames);
        self.frames[bus.offset() * self.num_frames + frame]
    }

    /// Write a single sample according to `mode`.
    ///
    /// # Panics
    ///
    /// Panics if `bus` is not present or `frame` is out of range.
    pub fn write(&mut self, bus: BusIndex, frame: usize, value: f32, mode: OutputMode) {
        assert!(frame < self.num_frames);
        let sample = &mut self.frames[bus.offset() * self.num_frames + frame];
        match mode {
            OutputMode::Add => *sample += value,
            OutputMode::Replace => *sample = value,
        }
    }
}
