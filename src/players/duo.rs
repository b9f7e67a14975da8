use super::player::Player;

/// A value for each player, addressed by [`Player`] rather than by name.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Duo<T>([T; 2]);

impl<T> Duo<T> {
    pub fn new(p1: T, p2: T) -> Self {
        Self([p1, p2])
    }
    /// Build both slots from a per-player constructor.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Player) -> T,
    {
        Self::new(f(Player::P1), f(Player::P2))
    }
    pub fn map<U, F>(self, mut f: F) -> Duo<U>
    where
        F: FnMut(T) -> U,
    {
        let [a, b] = self.0;
        Duo::new(f(a), f(b))
    }
    pub fn as_ref(&self) -> Duo<&T> {
        Duo::new(&self.0[0], &self.0[1])
    }
    /// Pairs each slot with its owner, P1 first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::all().into_iter().zip(self.0.iter())
    }
    pub fn into_inner(self) -> (T, T) {
        let [a, b] = self.0;
        (a, b)
    }
}

impl<T> From<(T, T)> for Duo<T> {
    fn from((p1, p2): (T, T)) -> Self {
        Self::new(p1, p2)
    }
}

impl<T> std::ops::Index<Player> for Duo<T> {
    type Output = T;
    fn index(&self, player: Player) -> &T {
        &self.0[player.index()]
    }
}

impl<T> std::ops::IndexMut<Player> for Duo<T> {
    fn index_mut(&mut self, player: Player) -> &mut T {
        &mut self.0[player.index()]
    }
}
