use color_eyre::eyre::{bail, Result};

#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    size: usize,
    mine_count: usize,
}

impl GameConfig {
    pub fn new(size: usize, mine_count: usize) -> Result<GameConfig> {
        if size < 1 {
            bail!("board size must be at least 1, got {}", size);
        }
        let area = match size.checked_mul(size) {
            Some(area) => area,
            None => bail!("board size {} is too large", size),
        };
        if mine_count >= area {
            bail!(
                "mine count must be below {} for a {}x{} board, got {}",
                area,
                size,
                size,
                mine_count
            );
        }
        Ok(GameConfig { size, mine_count })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size() {
        assert!(GameConfig::new(0, 0).is_err());
    }

    #[test]
    fn rejects_mine_count_filling_the_board() {
        assert!(GameConfig::new(9, 81).is_err());
        assert!(GameConfig::new(9, 100).is_err());
    }

    #[test]
    fn accepts_zero_mines() {
        assert!(GameConfig::new(9, 0).is_ok());
    }

    #[test]
    fn accepts_a_beginner_setup() {
        let config = GameConfig::new(9, 10).unwrap();
        assert_eq!(config.size(), 9);
        assert_eq!(config.mine_count(), 10);
    }
}
