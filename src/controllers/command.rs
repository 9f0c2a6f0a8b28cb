use crate::domain::{dto::ControlIntent, entity::ControlMode};

/// Prefix of the level command
const LEVELS_PREFIX: char = '#';
/// Prefix of the greeting sent by a freshly connected client
const HELLO_PREFIX: &str = "Connect ";
const EFFECT_ON: &str = "Effect ON";
const NORMAL_MODE: &str = "Normal Mode";

/// A message sent by the control page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlCommand {
    /// `#SSVV`, both levels as two hex digits
    SetLevels { sat: u8, val: u8 },
    EffectOn,
    NormalMode,
    /// Client greeting, carries no state change
    Hello,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// `#` not followed by exactly four hex digits
    MalformedLevels,
    Unknown,
}

/// Parse one text message
pub fn parse_command(text: &str) -> Result<ControlCommand, CommandError> {
    let text = text.trim();
    if let Some(digits) = text.strip_prefix(LEVELS_PREFIX) {
        return parse_levels(digits);
    }
    match text {
        EFFECT_ON => Ok(ControlCommand::EffectOn),
        NORMAL_MODE => Ok(ControlCommand::NormalMode),
        _ if text.starts_with(HELLO_PREFIX) => Ok(ControlCommand::Hello),
        _ => Err(CommandError::Unknown),
    }
}

fn parse_levels(digits: &str) -> Result<ControlCommand, CommandError> {
    // `from_str_radix` alone would take a leading sign
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CommandError::MalformedLevels);
    }
    let sat = u8::from_str_radix(&digits[..2], 16).map_err(|_| CommandError::MalformedLevels)?;
    let val = u8::from_str_radix(&digits[2..], 16).map_err(|_| CommandError::MalformedLevels)?;
    Ok(ControlCommand::SetLevels { sat, val })
}

impl From<ControlCommand> for ControlIntent {
    fn from(command: ControlCommand) -> Self {
        match command {
            ControlCommand::SetLevels { sat, val } => ControlIntent::new().with_levels(sat, val),
            ControlCommand::EffectOn => ControlIntent::new().with_mode(ControlMode::Effect),
            ControlCommand::NormalMode => ControlIntent::new().with_mode(ControlMode::Manual),
            ControlCommand::Hello => ControlIntent::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_sat_then_val() {
        assert_eq!(
            parse_command("#C8FF"),
            Ok(ControlCommand::SetLevels { sat: 0xC8, val: 0xFF })
        );
        assert_eq!(
            parse_command("#0a1b"),
            Ok(ControlCommand::SetLevels { sat: 0x0A, val: 0x1B })
        );
    }

    #[test]
    fn malformed_levels_are_rejected() {
        for text in ["#C8F", "#C8FFF", "#G8FF", "#+8FF", "#", "# C8F"] {
            assert_eq!(parse_command(text), Err(CommandError::MalformedLevels), "{text}");
        }
    }

    #[test]
    fn mode_commands_and_greeting() {
        assert_eq!(parse_command("Effect ON"), Ok(ControlCommand::EffectOn));
        assert_eq!(parse_command(" Normal Mode\n"), Ok(ControlCommand::NormalMode));
        assert_eq!(
            parse_command("Connect Thu Jan 01 1970"),
            Ok(ControlCommand::Hello)
        );
    }

    #[test]
    fn anything_else_is_unknown() {
        for text in ["", "effect on", "Effect", "Connect", "C8FF"] {
            assert_eq!(parse_command(text), Err(CommandError::Unknown), "{text}");
        }
    }

    #[test]
    fn commands_map_to_intents() {
        let intent: ControlIntent = ControlCommand::SetLevels { sat: 1, val: 2 }.into();
        assert_eq!((intent.sat, intent.val, intent.mode), (Some(1), Some(2), None));

        let intent: ControlIntent = ControlCommand::EffectOn.into();
        assert_eq!(intent.mode, Some(ControlMode::Effect));
        assert!(ControlIntent::from(ControlCommand::Hello).is_empty());
    }
}
