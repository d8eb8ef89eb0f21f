/// A front buffer that readers see and a back buffer that a pass writes into.
#[derive(Clone, Debug)]
pub struct DoubleBuffered<A> {
    pub front: A,
    pub back: A,
}

impl<A: Clone> DoubleBuffered<A> {
    pub fn new(initial: A) -> Self {
        Self {
            back: initial.clone(),
            front: initial,
        }
    }
}

impl<A> DoubleBuffered<A> {
    /// Publish the back buffer.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back)
    }
}
