/*
 * Copyright 2025 Huddle Contributors
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Local capture-device state.
//!
//! The video service owns the real media pipeline; this controller only
//! tracks the enabled bits for the two capture devices and mirrors them
//! onto the preview stream's tracks. The "join muted" toggle drives both
//! devices together — there is no independent per-device default.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use web_sys::MediaStream;

/// Enabled bit for a single capture device.
#[derive(Clone)]
pub struct CaptureState {
    enabled: Arc<AtomicBool>,
}

impl CaptureState {
    pub fn new() -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Sets the enabled bit to a given value, returning true if it was a
    /// change.
    pub fn set_enabled(&self, value: bool) -> bool {
        if value != self.enabled.load(Ordering::Acquire) {
            self.enabled.store(value, Ordering::Release);
            true
        } else {
            false
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }
}

impl Default for CaptureState {
    fn default() -> Self {
        Self::new()
    }
}

struct DeviceControllerInner {
    camera: CaptureState,
    microphone: CaptureState,
    preview: Option<MediaStream>,
}

/// Shared handle to the capture devices, passed through component props.
#[derive(Clone)]
pub struct DeviceController {
    inner: Rc<RefCell<DeviceControllerInner>>,
}

impl PartialEq for DeviceController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl DeviceController {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(DeviceControllerInner {
                camera: CaptureState::new(),
                microphone: CaptureState::new(),
                preview: None,
            })),
        }
    }

    /// Attach the preview stream and apply the current enabled bits to its
    /// tracks.
    pub fn set_preview(&self, stream: Option<MediaStream>) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.preview = stream;
        }
        let inner = self.inner.borrow();
        if let Some(stream) = &inner.preview {
            apply_to_tracks(stream, inner.microphone.is_enabled(), inner.camera.is_enabled());
        }
    }

    pub fn preview(&self) -> Option<MediaStream> {
        self.inner.borrow().preview.clone()
    }

    /// Enable or disable BOTH capture devices, re-applying the state to the
    /// preview tracks even when the bits did not change.
    pub fn set_all_enabled(&self, enabled: bool) {
        let inner = self.inner.borrow();
        inner.microphone.set_enabled(enabled);
        inner.camera.set_enabled(enabled);
        if let Some(stream) = &inner.preview {
            apply_to_tracks(stream, enabled, enabled);
        }
    }

    pub fn camera_enabled(&self) -> bool {
        self.inner.borrow().camera.is_enabled()
    }

    pub fn microphone_enabled(&self) -> bool {
        self.inner.borrow().microphone.is_enabled()
    }

    /// Toggle a single device mid-call.
    pub fn toggle_camera(&self) -> bool {
        let inner = self.inner.borrow();
        let next = !inner.camera.is_enabled();
        inner.camera.set_enabled(next);
        if let Some(stream) = &inner.preview {
            apply_to_tracks(stream, inner.microphone.is_enabled(), next);
        }
        next
    }

    pub fn toggle_microphone(&self) -> bool {
        let inner = self.inner.borrow();
        let next = !inner.microphone.is_enabled();
        inner.microphone.set_enabled(next);
        if let Some(stream) = &inner.preview {
            apply_to_tracks(stream, next, inner.camera.is_enabled());
        }
        next
    }

    /// Stop every preview track and drop the stream. Called when the owning
    /// screen unmounts.
    pub fn release(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(stream) = inner.preview.take() {
            for track in stream.get_tracks().iter() {
                let track: web_sys::MediaStreamTrack = track.into();
                track.stop();
            }
        }
    }
}

impl Default for DeviceController {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_to_tracks(stream: &MediaStream, mic_enabled: bool, camera_enabled: bool) {
    for track in stream.get_audio_tracks().iter() {
        let track: web_sys::MediaStreamTrack = track.into();
        track.set_enabled(mic_enabled);
    }
    for track in stream.get_video_tracks().iter() {
        let track: web_sys::MediaStreamTrack = track.into();
        track.set_enabled(camera_enabled);
    }
}
