//! Pattern 6: Adapter
//!
//! The audio player exposes one narrow `play(kind, file)` interface. It
//! handles mp3 itself and hands vlc and mp4 to an adapter that wraps two
//! players with incompatible method names, normalizing them behind the
//! shared trait. Kinds nobody handles are ignored on purpose; this unit
//! demonstrates interface translation, not input validation.
//!
//! Advantages:
//! - Existing incompatible types join a common interface unchanged
//! - Callers stop caring which backend does the work
//!
//! Trade-offs:
//! - One more layer between the caller and the real player
//! - Silently ignoring unknown kinds hides typos from the caller
//!
//! Run with: cargo run --bin p6_adapter

trait MediaPlayer {
    fn play(&self, kind: &str, file: &str);
}

// Two existing players with interfaces that do not line up.

struct VlcPlayer;

impl VlcPlayer {
    fn play_vlc(&self, file_path: &str) {
        println!("Playing vlc file: {}", file_path);
    }
}

struct Mp4Player;

impl Mp4Player {
    fn play_mp4(&self, file_name: &str) {
        println!("Playing mp4 file: {}", file_name);
    }
}

// Translates the narrow interface onto whichever backend fits the kind.
struct FormatAdapter {
    vlc: VlcPlayer,
    mp4: Mp4Player,
}

impl FormatAdapter {
    fn new() -> Self {
        FormatAdapter {
            vlc: VlcPlayer,
            mp4: Mp4Player,
        }
    }
}

impl MediaPlayer for FormatAdapter {
    fn play(&self, kind: &str, file: &str) {
        match kind {
            "vlc" => self.vlc.play_vlc(file),
            "mp4" => self.mp4.play_mp4(file),
            _ => {}
        }
    }
}

struct AudioPlayer {
    adapter: FormatAdapter,
}

impl AudioPlayer {
    fn new() -> Self {
        AudioPlayer {
            adapter: FormatAdapter::new(),
        }
    }
}

impl MediaPlayer for AudioPlayer {
    fn play(&self, kind: &str, file: &str) {
        match kind {
            "mp3" => println!("Playing mp3 file: {}", file),
            "vlc" | "mp4" => self.adapter.play(kind, file),
            // Anything else is a no-op by design.
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_kinds_play_through() {
        let player = AudioPlayer::new();
        player.play("mp3", "song.mp3");
        player.play("vlc", "movie.vlc");
        player.play("mp4", "clip.mp4");
    }

    #[test]
    fn unknown_kinds_are_ignored() {
        let player = AudioPlayer::new();
        // Falls through the match without reaching any backend.
        player.play("avi", "video.avi");
        player.play("", "empty");
    }
}

fn main() {
    println!("=== Adapter Pattern ===");

    let player = AudioPlayer::new();
    player.play("mp3", "beyond_the_horizon.mp3");
    player.play("mp4", "alone.mp4");
    player.play("vlc", "far_far_away.vlc");

    println!("\n=== Unsupported Kind ===");
    println!("(avi is not supported, the call does nothing)");
    player.play("avi", "mind_me.avi");
}
