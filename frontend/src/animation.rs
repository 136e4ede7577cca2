use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Runs a callback on every animation frame until it returns `false`.
/// Dropping the loop cancels the pending frame.
pub struct AnimationLoop {
    slot: FrameSlot,
}

impl AnimationLoop {
    pub fn start<F>(frame: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        schedule(slot.clone(), Rc::new(RefCell::new(frame)));
        Self { slot }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.slot.borrow_mut().take();
    }
}

fn schedule<F>(slot: FrameSlot, frame: Rc<RefCell<F>>)
where
    F: FnMut(f64) -> bool + 'static,
{
    let next_slot = slot.clone();
    let handle = request_animation_frame(move |timestamp| {
        let keep_going = (&mut *frame.borrow_mut())(timestamp);
        if keep_going {
            schedule(next_slot, frame);
        } else {
            next_slot.borrow_mut().take();
        }
    });
    *slot.borrow_mut() = Some(handle);
}
