//! Interactive, line based editing session.
//!
//! Every answer is read as one line from the input. The session prints its
//! prompts to the output, so the same code drives a terminal and a script.

use std::{
    fmt,
    io::{self, BufRead, Write},
    path::PathBuf,
    str::FromStr,
};

use lattice::AffineTransform;
use log::{error, info, warn};
use mf_format::Model;

use crate::{config::Config, obj};

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid choice: \"{0}\"")]
    InvalidChoice(String),
    #[error("Not a finite number: \"{0}\"")]
    InvalidNumber(String),
    #[error("No output file given")]
    NoOutputPath,
    #[error("Could not save model: {0:#}")]
    Save(anyhow::Error),
    #[error("Input ended")]
    EndOfInput,
}

pub type Result<T> = ::std::result::Result<T, SessionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Translate,
    Scale,
    RotateX,
    RotateY,
    RotateZ,
    Apply,
    Reset,
    Save,
    Quit,
    Show,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::Translate,
        Command::Scale,
        Command::RotateX,
        Command::RotateY,
        Command::RotateZ,
        Command::Apply,
        Command::Reset,
        Command::Save,
        Command::Quit,
        Command::Show,
    ];

    pub fn number(self) -> usize {
        match self {
            Command::Translate => 1,
            Command::Scale => 2,
            Command::RotateX => 3,
            Command::RotateY => 4,
            Command::RotateZ => 5,
            Command::Apply => 6,
            Command::Reset => 7,
            Command::Save => 8,
            Command::Quit => 9,
            Command::Show => 10,
        }
    }
}

impl FromStr for Command {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self> {
        let choice = s.trim();
        choice
            .parse::<usize>()
            .ok()
            .and_then(|number| Self::ALL.iter().copied().find(|x| x.number() == number))
            .ok_or_else(|| SessionError::InvalidChoice(choice.into()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Command::Translate => "Translate",
            Command::Scale => "Scale",
            Command::RotateX => "Rotate about X",
            Command::RotateY => "Rotate about Y",
            Command::RotateZ => "Rotate about Z",
            Command::Apply => "Apply transform to model",
            Command::Reset => "Reset transform",
            Command::Save => "Save model",
            Command::Quit => "Quit",
            Command::Show => "Show transform and model",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: W,
    model: Model,
    transform: AffineTransform,
    config: Config,
    default_output: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, model: Model, config: Config) -> Self {
        Self {
            input,
            output,
            model,
            transform: AffineTransform::new(),
            config,
            default_output: None,
        }
    }

    /// Path used by the save command when the answer is left empty.
    pub fn with_default_output(mut self, path: Option<PathBuf>) -> Self {
        self.default_output = path;
        self
    }

    /// Runs the menu loop until the user quits or the input ends, and hands
    /// back the (possibly transformed) model.
    ///
    /// Only IO failures on the session streams abort the loop.
    pub fn run(mut self) -> Result<Model> {
        writeln!(
            self.output,
            "Model loaded: {} vertices, {} polygons",
            self.model.vertex_count(),
            self.model.polygon_count()
        )?;

        loop {
            self.print_menu()?;

            let flow = match self.read_line() {
                Ok(line) => line.parse::<Command>().and_then(|x| self.execute(x)),
                Err(err) => Err(err),
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(SessionError::EndOfInput) => {
                    info!("Input ended, leaving session");
                    break;
                }
                Err(err @ SessionError::Io(_)) => return Err(err),
                Err(err) => {
                    error!("{}", err);
                    writeln!(self.output, "Error: {}", err)?;
                }
            }
        }

        Ok(self.model)
    }

    fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Translate => {
                let tx = self.read_number("X offset")?;
                let ty = self.read_number("Y offset")?;
                let tz = self.read_number("Z offset")?;
                self.transform.translation(tx, ty, tz);
                writeln!(self.output, "Translation added")?;
            }
            Command::Scale => {
                let sx = self.read_number("X factor")?;
                let sy = self.read_number("Y factor")?;
                let sz = self.read_number("Z factor")?;
                self.transform.scaling(sx, sy, sz);
                writeln!(self.output, "Scaling added")?;
            }
            Command::RotateX => {
                let angle = self.read_number("Angle (degrees)")?;
                self.transform.rotation_x(angle);
                writeln!(self.output, "Rotation about X added")?;
            }
            Command::RotateY => {
                let angle = self.read_number("Angle (degrees)")?;
                self.transform.rotation_y(angle);
                writeln!(self.output, "Rotation about Y added")?;
            }
            Command::RotateZ => {
                let angle = self.read_number("Angle (degrees)")?;
                self.transform.rotation_z(angle);
                writeln!(self.output, "Rotation about Z added")?;
            }
            Command::Apply => {
                if self.transform.is_degenerate() {
                    warn!("Transform is degenerate, the model will be flattened");
                }
                self.transform.apply_to_model(&mut self.model);
                info!("Applied transform to {} vertices", self.model.vertex_count());
                writeln!(self.output, "Transform applied to model")?;
            }
            Command::Reset => {
                self.transform.reset();
                writeln!(self.output, "Transform reset")?;
            }
            Command::Save => {
                let path = self.read_output_path()?;
                obj::save(&self.model, &path, &self.config).map_err(SessionError::Save)?;
                writeln!(self.output, "Model saved to {}", path.display())?;
            }
            Command::Quit => {
                writeln!(self.output, "Bye")?;
                return Ok(Flow::Quit);
            }
            Command::Show => {
                writeln!(self.output, "Transform:\n{:.4}", self.transform)?;
                writeln!(
                    self.output,
                    "Model: {} vertices, {} texture vertices, {} normals, {} polygons",
                    self.model.vertex_count(),
                    self.model.texture_vertices.len(),
                    self.model.normals.len(),
                    self.model.polygon_count()
                )?;
            }
        }

        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        for command in Command::ALL.iter() {
            writeln!(self.output, "{:>2}. {}", command.number(), command)?;
        }
        write!(self.output, "Choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::EndOfInput);
        }
        Ok(line.trim().to_owned())
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_number(&mut self, label: &str) -> Result<f32> {
        let answer = self.prompt(label)?;
        match answer.parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(SessionError::InvalidNumber(answer)),
        }
    }

    fn read_output_path(&mut self) -> Result<PathBuf> {
        let label = match &self.default_output {
            Some(path) => format!("Output file [{}]", path.display()),
            None => "Output file".to_owned(),
        };

        let answer = self.prompt(&label)?;
        if !answer.is_empty() {
            return Ok(PathBuf::from(answer));
        }

        self.default_output.clone().ok_or(SessionError::NoOutputPath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_from_str() {
        assert_eq!(" 1 ".parse::<Command>().ok(), Some(Command::Translate));
        assert_eq!("9".parse::<Command>().ok(), Some(Command::Quit));
        assert_eq!("10".parse::<Command>().ok(), Some(Command::Show));

        for bad in ["0", "11", "x", ""] {
            assert!(matches!(bad.parse::<Command>(), Err(SessionError::InvalidChoice(_))));
        }
    }

    #[test]
    fn command_numbers_are_unique() {
        for (i, command) in Command::ALL.iter().enumerate() {
            assert_eq!(command.number(), i + 1);
        }
    }
}
