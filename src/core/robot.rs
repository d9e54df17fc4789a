use crate::config::RobotConfig;
use crate::core::messenger::{MessageRequest, Messenger};
use crate::core::table::Table;
use crate::domain::model::{Direction, Position, RawArg};
use crate::domain::ports::Surface;
use crate::utils::error::RobotError;

/// Result of a robot command: the robot itself, or why nothing changed.
pub type Outcome<'a, S> = std::result::Result<&'a Robot<S>, RobotError>;

/// The toy robot. Unplaced until the first valid PLACE; after that every
/// command either fully applies or leaves the state untouched.
#[derive(Debug, Clone)]
pub struct Robot<S: Surface = Table> {
    surface: S,
    messenger: Messenger,
    step: i64,
    position: Option<Position>,
    has_been_placed: bool,
}

impl<S: Surface> Robot<S> {
    pub fn new(config: &RobotConfig, surface: S, messenger: Messenger) -> Self {
        Self {
            surface,
            messenger,
            step: config.step,
            position: None,
            has_been_placed: false,
        }
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn has_been_placed(&self) -> bool {
        self.has_been_placed
    }

    pub fn messenger(&self) -> &Messenger {
        &self.messenger
    }

    /// 放置機器人
    ///
    /// Checks run in order: facing present, facing is text, integer
    /// coordinates, non-negative coordinates, known direction, on the table.
    /// Only the last one is a domain error; the rest are validation errors.
    pub fn place(
        &mut self,
        x: impl Into<RawArg>,
        y: impl Into<RawArg>,
        facing: Option<RawArg>,
    ) -> Outcome<'_, S> {
        let (x, y): (RawArg, RawArg) = (x.into(), y.into());

        let facing = match facing {
            None => return Err(self.validation("no_face")),
            Some(RawArg::Int(_)) => return Err(self.validation("face_not_string")),
            Some(RawArg::Text(text)) => text,
        };

        let (x, y) = match (x.as_int(), y.as_int()) {
            (Some(x), Some(y)) => (x, y),
            _ => return Err(self.validation("non_int_coordinates")),
        };

        if x < 0 || y < 0 {
            return Err(self.validation("no_negative_coordinates"));
        }

        let facing: Direction = facing
            .parse()
            .map_err(|_| self.validation("wrong_direction"))?;

        if self.surface.is_out_of_table(x, y) {
            tracing::debug!("PLACE {},{} rejected: outside of the table", x, y);
            return Err(RobotError::Domain {
                message: self.messenger.render("wrong_place"),
            });
        }

        let position = Position::new(x, y, facing);
        tracing::debug!("Robot placed at {:?}", position);
        self.position = Some(position);
        self.has_been_placed = true;
        Ok(&*self)
    }

    pub fn r#move(&mut self) -> Outcome<'_, S> {
        let current = self.current()?;
        let next = current
            .advanced(self.step)
            .filter(|next| !self.surface.is_out_of_table(next.x, next.y));

        let Some(next) = next else {
            tracing::debug!("MOVE from {:?} rejected: would fall off", current);
            return Err(RobotError::Domain {
                message: self.messenger.render("wrong_move"),
            });
        };

        self.position = Some(next);
        Ok(&*self)
    }

    pub fn left(&mut self) -> Outcome<'_, S> {
        self.turn(Direction::left)
    }

    pub fn right(&mut self) -> Outcome<'_, S> {
        self.turn(Direction::right)
    }

    /// Current position as text, or the "place me first" hint before the
    /// first placement. Never an error.
    pub fn report(&self) -> String {
        match self.position {
            Some(p) if self.has_been_placed => self.messenger.render_with(
                &MessageRequest::new("position")
                    .with("x", p.x)
                    .with("y", p.y)
                    .with("f", p.facing),
            ),
            _ => self.messenger.render("place_me_first"),
        }
    }

    fn turn(&mut self, rotate: fn(Direction) -> Direction) -> Outcome<'_, S> {
        let current = self.current()?;
        self.position = Some(Position {
            facing: rotate(current.facing),
            ..current
        });
        Ok(&*self)
    }

    fn current(&self) -> Result<Position, RobotError> {
        match (self.has_been_placed, self.position) {
            (true, Some(position)) => Ok(position),
            _ => Err(RobotError::Sequencing {
                message: self.messenger.render("no_initial_command"),
            }),
        }
    }

    fn validation(&self, key: &str) -> RobotError {
        RobotError::Validation {
            message: self.messenger.render(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::utils::error::ErrorCategory;

    /// Bounds oracle that accepts everything, to drive the robot without a table.
    #[derive(Debug)]
    struct Endless;

    impl Surface for Endless {
        fn is_out_of_table(&self, _x: i64, _y: i64) -> bool {
            false
        }
    }

    fn endless_robot() -> Robot<Endless> {
        let config = GameConfig::embedded().unwrap();
        Robot::new(&config.robot, Endless, Messenger::new(&config.messenger))
    }

    #[test]
    fn test_starts_unplaced() {
        let robot = endless_robot();
        assert!(robot.position().is_none());
        assert!(!robot.has_been_placed());
    }

    #[test]
    fn test_custom_surface_allows_far_moves() {
        let mut robot = endless_robot();
        robot.place(1000, 1000, Some("north".into())).unwrap();
        robot.r#move().unwrap();
        assert_eq!(
            robot.position(),
            Some(Position::new(1000, 1001, Direction::North))
        );
    }

    #[test]
    fn test_step_comes_from_config() {
        let config = GameConfig::embedded().unwrap();
        let mut robot = Robot::new(
            &RobotConfig { step: 2 },
            Endless,
            Messenger::new(&config.messenger),
        );
        robot.place(0, 0, Some("east".into())).unwrap();
        robot.r#move().unwrap();
        assert_eq!(robot.position(), Some(Position::new(2, 0, Direction::East)));
    }

    #[test]
    fn test_overflowing_step_is_a_wrong_move() {
        let config = GameConfig::embedded().unwrap();
        let mut robot = Robot::new(
            &RobotConfig { step: i64::MAX },
            Endless,
            Messenger::new(&config.messenger),
        );
        robot.place(1, 1, Some("east".into())).unwrap();

        let err = robot.r#move().unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Domain);
        assert_eq!(err.message(), robot.messenger().render("wrong_move"));
        assert_eq!(robot.position(), Some(Position::new(1, 1, Direction::East)));
    }

    #[test]
    fn test_turn_before_place_is_sequencing() {
        let mut robot = endless_robot();
        assert_eq!(
            robot.left().unwrap_err().category(),
            ErrorCategory::Sequencing
        );
    }
}
