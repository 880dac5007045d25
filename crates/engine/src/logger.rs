use crate::types::{Color, Move, MoveError};
use std::fs::{self, File};
use std::io::Write;

/// Buffered game log: numbered moves, rejected-move diagnostics and search
/// summaries, flushed to a timestamped file under `logs/` on demand.
#[derive(Debug)]
pub struct GameLogger {
    pub log_buffer: String,
    pub advanced_logging: bool,
    move_count: u32,
    indent_level: usize,
}

impl GameLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(64 * 1024),
            advanced_logging: false,
            move_count: 0,
            indent_level: 0,
        };

        logger.log("=== Chess Engine Game Log ===");
        logger.log(&format!(
            "Date: {}",
            chrono::Local::now().format("%m/%d/%Y %H:%M:%S")
        ));
        logger
    }

    pub fn enable_advanced_logging(&mut self) {
        self.advanced_logging = true;
        self.log("Advanced logging enabled");
    }

    pub fn disable_advanced_logging(&mut self) {
        self.advanced_logging = false;
    }

    pub fn log(&mut self, message: &str) {
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    pub fn log_with_indent(&mut self, message: &str) {
        let indent = "  ".repeat(self.indent_level);
        self.log_buffer.push_str(&indent);
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Record an executed move under the next move number.
    pub fn log_move(&mut self, color: Color, mv: Move) {
        self.move_count += 1;
        self.log(&format!("{}. {} plays {}", self.move_count, color, mv));
    }

    /// Record why a requested move was turned down.
    pub fn log_rejected_move(&mut self, error: &MoveError) {
        self.log(&format!("Rejected move: {}", error));
    }

    /// Record a search summary: chosen move (or none), score and node count.
    pub fn log_search_result(&mut self, depth: u32, best_move: Option<Move>, score: i32, nodes: u64) {
        match best_move {
            Some(mv) => self.log(&format!(
                "Search depth {}: best {} (score {}, {} nodes)",
                depth, mv, score, nodes
            )),
            None => self.log(&format!(
                "Search depth {}: no candidate moves (score {}, {} nodes)",
                depth, score, nodes
            )),
        }
    }

    pub fn log_game_over(&mut self, winner: Color) {
        self.log(&format!("{} wins!", winner));
    }

    /// Flush the buffer to `logs/<timestamp>.txt` and return the file name.
    pub fn save_to_file(&mut self, reason: &str) -> Result<String, String> {
        if let Err(e) = fs::create_dir_all("logs") {
            return Err(format!("Failed to create logs directory: {}", e));
        }

        let now = chrono::Local::now();
        let filename = format!("logs/{}.txt", now.format("%m_%d_%Y_%H_%M_%S"));

        self.log(&format!("Game ended: {} - saving log", reason));

        match File::create(&filename) {
            Ok(mut file) => {
                if let Err(e) = file.write_all(self.log_buffer.as_bytes()) {
                    return Err(format!("Failed to write log file: {}", e));
                }
                Ok(filename)
            }
            Err(e) => Err(format!("Failed to create log file: {}", e)),
        }
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}
