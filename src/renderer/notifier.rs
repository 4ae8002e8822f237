use parking_lot::Mutex;

use crate::{renderer::PixelBuffer, text::DestinationHandle};

/// Receives finished pixel buffers.
///
/// Delivery is one way: the notifier takes ownership of the pixels and the
/// pipeline keeps nothing.
pub trait CompletionNotifier {
    fn notify(&self, pixels: PixelBuffer, destination: DestinationHandle);
}

impl<F> CompletionNotifier for F
where
    F: Fn(PixelBuffer, DestinationHandle),
{
    fn notify(&self, pixels: PixelBuffer, destination: DestinationHandle) {
        self(pixels, destination)
    }
}

/// Caller-owned table of images waiting to be uploaded.
///
/// A [`DestinationHandle`] from [`TextureSlots::allocate`] is an index into
/// this table. Delivered buffers stay in their slot until [`TextureSlots::take`]
/// removes them.
#[derive(Default)]
pub struct TextureSlots {
    slots: Mutex<Vec<Slot>>,
}

#[derive(Default)]
enum Slot {
    #[default]
    Free,
    Waiting,
    Ready(PixelBuffer),
}

impl TextureSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a slot and returns the handle to put into a request.
    pub fn allocate(&self) -> DestinationHandle {
        let mut slots = self.slots.lock();
        let index = match slots.iter().position(|slot| matches!(slot, Slot::Free)) {
            Some(index) => {
                slots[index] = Slot::Waiting;
                index
            }
            None => {
                slots.push(Slot::Waiting);
                slots.len() - 1
            }
        };
        DestinationHandle(index as u64)
    }

    /// Removes a delivered image, leaving the slot allocated.
    pub fn take(&self, handle: DestinationHandle) -> Option<PixelBuffer> {
        let mut slots = self.slots.lock();
        let slot = slots.get_mut(usize::try_from(handle.get()).ok()?)?;
        match std::mem::replace(slot, Slot::Waiting) {
            Slot::Ready(pixels) => Some(pixels),
            other => {
                *slot = other;
                None
            }
        }
    }

    /// Frees the slot so its handle can be handed out again.
    pub fn release(&self, handle: DestinationHandle) {
        let mut slots = self.slots.lock();
        if let Some(slot) = usize::try_from(handle.get())
            .ok()
            .and_then(|index| slots.get_mut(index))
        {
            *slot = Slot::Free;
        }
    }

    pub fn is_ready(&self, handle: DestinationHandle) -> bool {
        let slots = self.slots.lock();
        usize::try_from(handle.get())
            .ok()
            .and_then(|index| slots.get(index))
            .is_some_and(|slot| matches!(slot, Slot::Ready(_)))
    }
}

impl CompletionNotifier for TextureSlots {
    /// Replaces whatever image the slot held before.
    fn notify(&self, pixels: PixelBuffer, destination: DestinationHandle) {
        let mut slots = self.slots.lock();
        let slot = usize::try_from(destination.get())
            .ok()
            .and_then(|index| slots.get_mut(index));

        match slot {
            Some(slot) if !matches!(slot, Slot::Free) => *slot = Slot::Ready(pixels),
            _ => log::warn!(
                "Dropping text image for unallocated destination {:?}.",
                destination
            ),
        }
    }
}
