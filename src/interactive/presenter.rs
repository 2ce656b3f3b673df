//! Presentation collaborator seam
//!
//! One `present` call per generation: show the rendered batch, block until
//! the human answers, hand back a [`Verdict`]. Malformed input is re-prompted
//! locally and never reaches the controller.

use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

use crate::error::{EvoResult, EvolveError};
use crate::interactive::decoder::ImageBatch;

/// The human's answer for one generation
///
/// `mask` is index-aligned with the presented images. It is only consulted
/// when neither flag is set; `reset` and `exit` short-circuit the selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// Discard the population and restart from fresh samples
    pub reset: bool,
    /// Stop the run; no next population is computed
    pub exit: bool,
    /// Selection mask over the presented images
    pub mask: Vec<bool>,
}

impl Verdict {
    /// A selection verdict with the given mask
    pub fn select(mask: Vec<bool>) -> Self {
        Self {
            reset: false,
            exit: false,
            mask,
        }
    }

    /// A restart verdict
    pub fn reset() -> Self {
        Self {
            reset: true,
            exit: false,
            mask: Vec::new(),
        }
    }

    /// A terminal verdict
    pub fn exit() -> Self {
        Self {
            reset: false,
            exit: true,
            mask: Vec::new(),
        }
    }

    /// Number of selected images
    pub fn selected_count(&self) -> usize {
        self.mask.iter().filter(|&&kept| kept).count()
    }
}

/// The presentation collaborator
///
/// Exactly one invocation per generation; blocks until the human responds.
/// Implementations guarantee a well-formed verdict: when selecting, the mask
/// has the same length as `images` and is index-aligned with it.
pub trait Presenter {
    /// Display the batch and collect the human's verdict
    fn present(&mut self, images: &ImageBatch) -> EvoResult<Verdict>;
}

/// Terminal presenter
///
/// Draws the batch either as an ANSI truecolor preview grid or as a plain
/// textual listing, then prompts for a selection. Unparseable or
/// out-of-range input is reported and re-prompted; it never escapes this
/// type. End of input behaves like closing the window: an exit verdict.
pub struct ConsolePresenter<R: BufRead, W: Write> {
    input: R,
    output: W,
    columns: usize,
    color_preview: bool,
}

impl ConsolePresenter<BufReader<Stdin>, Stdout> {
    /// Create a presenter wired to stdin/stdout
    pub fn from_stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePresenter<R, W> {
    /// Create a presenter over arbitrary reader/writer pairs
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            columns: 5,
            color_preview: true,
        }
    }

    /// Set the number of images per grid row
    pub fn with_columns(mut self, columns: usize) -> Self {
        assert!(columns > 0, "Columns must be positive");
        self.columns = columns;
        self
    }

    /// Toggle the ANSI preview grid (plain textual listing when false)
    pub fn with_color_preview(mut self, color_preview: bool) -> Self {
        self.color_preview = color_preview;
        self
    }

    fn draw(&mut self, images: &ImageBatch) -> std::io::Result<()> {
        writeln!(self.output, "Select the images with the desired traits.")?;
        if self.color_preview {
            self.draw_preview(images)
        } else {
            self.draw_plain(images)
        }
    }

    fn draw_preview(&mut self, images: &ImageBatch) -> std::io::Result<()> {
        const CELLS_X: usize = 8;
        const CELLS_Y: usize = 4;

        for (row_idx, row) in images.chunks(self.columns).enumerate() {
            for cy in 0..CELLS_Y {
                for image in row {
                    for cx in 0..CELLS_X {
                        let x = cx * image.width() / CELLS_X;
                        let y = cy * image.height() / CELLS_Y;
                        let [r, g, b] = image.pixel(x, y);
                        write!(self.output, "\x1b[48;2;{r};{g};{b}m  ")?;
                    }
                    write!(self.output, "\x1b[0m ")?;
                }
                writeln!(self.output)?;
            }
            for (col_idx, _) in row.iter().enumerate() {
                let idx = row_idx * self.columns + col_idx;
                write!(
                    self.output,
                    "{:^width$} ",
                    format!("[{idx}]"),
                    width = CELLS_X * 2
                )?;
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn draw_plain(&mut self, images: &ImageBatch) -> std::io::Result<()> {
        for (idx, image) in images.iter().enumerate() {
            writeln!(
                self.output,
                "  [{idx:>2}] {}x{}  mean luma {:.2}",
                image.width(),
                image.height(),
                image.mean_luma()
            )?;
        }
        Ok(())
    }

    /// Parse a selection line into a mask over `count` images
    ///
    /// An empty line selects nothing (an all-false mask, which the controller
    /// treats as a restart).
    fn parse_selection(line: &str, count: usize) -> Result<Vec<bool>, String> {
        let mut mask = vec![false; count];
        for token in line.split_whitespace() {
            let idx: usize = token
                .parse()
                .map_err(|_| format!("'{token}' is not an image index"))?;
            if idx >= count {
                return Err(format!("index {idx} out of range, images are 0..{count}"));
            }
            mask[idx] = true;
        }
        Ok(mask)
    }
}

impl<R: BufRead, W: Write> Presenter for ConsolePresenter<R, W> {
    fn present(&mut self, images: &ImageBatch) -> EvoResult<Verdict> {
        let io_err = |e: std::io::Error| EvolveError::Presentation(e.to_string());

        self.draw(images).map_err(io_err)?;

        loop {
            write!(
                self.output,
                "indices separated by spaces, 'r' to reset, 'q' to quit > "
            )
            .map_err(io_err)?;
            self.output.flush().map_err(io_err)?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line).map_err(io_err)?;
            if read == 0 {
                // End of input: same as closing the window.
                return Ok(Verdict::exit());
            }

            match line.trim() {
                "q" | "quit" | "exit" => return Ok(Verdict::exit()),
                "r" | "reset" => return Ok(Verdict::reset()),
                trimmed => match Self::parse_selection(trimmed, images.len()) {
                    Ok(mask) => return Ok(Verdict::select(mask)),
                    Err(message) => {
                        writeln!(self.output, "{message}").map_err(io_err)?;
                    }
                },
            }
        }
    }
}

/// Replay presenter for tests and demos
///
/// Hands out a fixed sequence of verdicts and records the size of every
/// batch it was shown. Exhausting the script is a presentation error.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPresenter {
    script: VecDeque<Verdict>,
    presented_sizes: Vec<usize>,
}

impl ScriptedPresenter {
    /// Create a presenter that replays the given verdicts in order
    pub fn new(script: Vec<Verdict>) -> Self {
        Self {
            script: script.into(),
            presented_sizes: Vec::new(),
        }
    }

    /// Sizes of the batches presented so far, in order
    pub fn presented_sizes(&self) -> &[usize] {
        &self.presented_sizes
    }
}

impl Presenter for ScriptedPresenter {
    fn present(&mut self, images: &ImageBatch) -> EvoResult<Verdict> {
        self.presented_sizes.push(images.len());
        self.script
            .pop_front()
            .ok_or_else(|| EvolveError::Presentation("scripted verdicts exhausted".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::decoder::Image;

    fn gray_batch(count: usize) -> ImageBatch {
        (0..count)
            .map(|_| Image::new(2, 2, vec![128; 2 * 2 * 3]))
            .collect()
    }

    fn present_with_input(input: &str, count: usize) -> (Verdict, String) {
        let mut presenter = ConsolePresenter::new(input.as_bytes(), Vec::new())
            .with_color_preview(false)
            .with_columns(3);
        let verdict = presenter.present(&gray_batch(count)).unwrap();
        let transcript = String::from_utf8(presenter.output).unwrap();
        (verdict, transcript)
    }

    #[test]
    fn test_parse_indices() {
        let (verdict, _) = present_with_input("0 2\n", 4);
        assert_eq!(verdict, Verdict::select(vec![true, false, true, false]));
        assert_eq!(verdict.selected_count(), 2);
    }

    #[test]
    fn test_empty_line_selects_nothing() {
        let (verdict, _) = present_with_input("\n", 3);
        assert_eq!(verdict, Verdict::select(vec![false, false, false]));
    }

    #[test]
    fn test_duplicate_indices_collapse() {
        let (verdict, _) = present_with_input("1 1 1\n", 3);
        assert_eq!(verdict.selected_count(), 1);
    }

    #[test]
    fn test_reset_and_quit_words() {
        let (verdict, _) = present_with_input("r\n", 2);
        assert!(verdict.reset);

        let (verdict, _) = present_with_input("q\n", 2);
        assert!(verdict.exit);

        let (verdict, _) = present_with_input("quit\n", 2);
        assert!(verdict.exit);
    }

    #[test]
    fn test_malformed_input_reprompts() {
        let (verdict, transcript) = present_with_input("banana\n0\n", 2);
        assert_eq!(verdict, Verdict::select(vec![true, false]));
        assert!(transcript.contains("'banana' is not an image index"));
    }

    #[test]
    fn test_out_of_range_index_reprompts() {
        let (verdict, transcript) = present_with_input("7\n1\n", 2);
        assert_eq!(verdict, Verdict::select(vec![false, true]));
        assert!(transcript.contains("index 7 out of range"));
    }

    #[test]
    fn test_eof_is_exit() {
        let (verdict, _) = present_with_input("", 2);
        assert!(verdict.exit);
    }

    #[test]
    fn test_plain_listing_mentions_every_index() {
        let (_, transcript) = present_with_input("q\n", 3);
        for idx in 0..3 {
            assert!(transcript.contains(&format!("[ {idx}]")));
        }
    }

    #[test]
    fn test_preview_grid_labels_every_index() {
        let mut presenter =
            ConsolePresenter::new("q\n".as_bytes(), Vec::new()).with_columns(2);
        presenter.present(&gray_batch(5)).unwrap();
        let transcript = String::from_utf8(presenter.output).unwrap();
        for idx in 0..5 {
            assert!(transcript.contains(&format!("[{idx}]")));
        }
    }

    #[test]
    fn test_scripted_presenter_replays_in_order() {
        let mut presenter = ScriptedPresenter::new(vec![
            Verdict::select(vec![true, false]),
            Verdict::reset(),
            Verdict::exit(),
        ]);

        assert!(!presenter.present(&gray_batch(2)).unwrap().reset);
        assert!(presenter.present(&gray_batch(2)).unwrap().reset);
        assert!(presenter.present(&gray_batch(2)).unwrap().exit);
        assert_eq!(presenter.presented_sizes(), &[2, 2, 2]);
    }

    #[test]
    fn test_scripted_presenter_exhaustion_errors() {
        let mut presenter = ScriptedPresenter::new(vec![]);
        let result = presenter.present(&gray_batch(1));
        assert!(matches!(result, Err(EvolveError::Presentation(_))));
    }
}
