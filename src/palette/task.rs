use std::sync::mpsc::{self, Receiver, TryRecvError};

use crate::{palette::extract::Palette, sprite::frame::SpriteFrame};

/// Where a palette currently stands.
#[derive(Debug)]
pub enum PaletteState {
    /// Extraction is still running on the rayon pool.
    Pending(Receiver<Palette>),
    Resolved(Palette),
}

/// One-shot palette derivation.
///
/// Resolves at most once; afterwards the palette never changes.
#[derive(Debug)]
pub struct PaletteTask {
    state: PaletteState,
}

impl PaletteTask {
    /// Start extracting a palette from `reference` on the global rayon pool.
    pub fn spawn(reference: SpriteFrame) -> Self {
        let (tx, rx) = mpsc::sync_channel(1);
        rayon::spawn(move || {
            let palette = Palette::extract(&reference);
            // The receiver may be gone if the face was dropped first.
            let _ = tx.send(palette);
        });
        Self {
            state: PaletteState::Pending(rx),
        }
    }

    /// Wait on a palette produced elsewhere, e.g. by a host-managed worker.
    pub fn from_receiver(rx: Receiver<Palette>) -> Self {
        Self {
            state: PaletteState::Pending(rx),
        }
    }

    /// An already-resolved task.
    pub fn ready(palette: Palette) -> Self {
        Self {
            state: PaletteState::Resolved(palette),
        }
    }

    pub fn state(&self) -> &PaletteState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, PaletteState::Pending(_))
    }

    pub fn resolved(&self) -> Option<Palette> {
        match self.state {
            PaletteState::Resolved(p) => Some(p),
            PaletteState::Pending(_) => None,
        }
    }

    /// Non-blocking check. Returns the palette only on the call that resolves it.
    pub fn poll(&mut self) -> Option<Palette> {
        let PaletteState::Pending(rx) = &self.state else {
            return None;
        };
        let palette = match rx.try_recv() {
            Ok(p) => p,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                tracing::warn!("palette task ended without a result; using defaults");
                Palette::default()
            }
        };
        self.state = PaletteState::Resolved(palette);
        tracing::debug!("palette resolved");
        Some(palette)
    }

    /// Block until the palette is known.
    pub fn wait(&mut self) -> Palette {
        let PaletteState::Pending(rx) = &self.state else {
            return self.resolved().unwrap_or_default();
        };
        let palette = rx.recv().unwrap_or_else(|_| {
            tracing::warn!("palette task ended without a result; using defaults");
            Palette::default()
        });
        self.state = PaletteState::Resolved(palette);
        palette
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/task.rs"]
mod tests;
