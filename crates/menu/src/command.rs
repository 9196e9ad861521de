use std::fmt;
use std::str::FromStr;

/// # Summary
/// 菜单命令枚举，每个变体对应一个菜单选项。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // 1. 录入 24 小时电价
    Input,
    // 2. 最低、最高及平均价
    Stats,
    // 3. 按电价从高到低排序
    Rank,
    // 4. 最佳 4 小时充电窗口
    BestWindow,
    // 5. 文本柱状图
    Visualize,
    // e. 退出
    Exit,
}

impl Command {
    /// 菜单中列出的全部命令，按显示顺序排列。
    pub const ALL: [Command; 6] = [
        Command::Input,
        Command::Stats,
        Command::Rank,
        Command::BestWindow,
        Command::Visualize,
        Command::Exit,
    ];

    /// 菜单中显示的说明文字。
    pub fn label(&self) -> &'static str {
        match self {
            Command::Input => "Inmatning",
            Command::Stats => "Min, Max och Medel",
            Command::Rank => "Sortera",
            Command::BestWindow => "Bästa Laddningstid (4h)",
            Command::Visualize => "Visualisering",
            Command::Exit => "Avsluta",
        }
    }
}

impl FromStr for Command {
    type Err = String;

    /// 输入先去除首尾空白并转为小写再匹配，因此 `E` 同样表示退出。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" => Ok(Command::Input),
            "2" => Ok(Command::Stats),
            "3" => Ok(Command::Rank),
            "4" => Ok(Command::BestWindow),
            "5" => Ok(Command::Visualize),
            "e" => Ok(Command::Exit),
            other => Err(format!("Unknown menu choice: {}", other)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Input => write!(f, "1"),
            Command::Stats => write!(f, "2"),
            Command::Rank => write!(f, "3"),
            Command::BestWindow => write!(f, "4"),
            Command::Visualize => write!(f, "5"),
            Command::Exit => write!(f, "e"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!("1".parse::<Command>(), Ok(Command::Input));
        assert_eq!(" 4 \n".parse::<Command>(), Ok(Command::BestWindow));
        assert_eq!("E".parse::<Command>(), Ok(Command::Exit));
        assert!("6".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for command in Command::ALL {
            assert_eq!(command.to_string().parse::<Command>(), Ok(command));
        }
    }
}
