//! Route stack for the list screen and the per-movie detail screen

use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    MovieList,
    MovieDetail(i64),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::MovieList => f.write_str("movieList"),
            Route::MovieDetail(id) => write!(f, "movieDetail/{}", id),
        }
    }
}

impl FromStr for Route {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            None if s == "movieList" => Ok(Route::MovieList),
            Some(("movieDetail", id)) => id.parse().map(Route::MovieDetail).map_err(|_| ()),
            _ => Err(()),
        }
    }
}

/// Receiver of card activations
pub trait Navigation {
    fn open_detail(&mut self, movie_id: i64);
}

#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            stack: vec![Route::MovieList],
        }
    }
}

impl Navigator {
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::MovieList)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Pop the top route. The list screen is never popped.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            let route = self.stack.pop();
            debug!(from = ?route, "Navigated back");
            true
        } else {
            false
        }
    }

    fn push(&mut self, route: Route) {
        debug!(route = %route, "Navigating");
        self.stack.push(route);
    }
}

impl Navigation for Navigator {
    fn open_detail(&mut self, movie_id: i64) {
        self.push(Route::MovieDetail(movie_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_list() {
        let nav = Navigator::default();
        assert_eq!(nav.current(), Route::MovieList);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_open_detail_then_back() {
        let mut nav = Navigator::default();
        nav.open_detail(42);
        assert_eq!(nav.current(), Route::MovieDetail(42));
        assert!(nav.back());
        assert_eq!(nav.current(), Route::MovieList);
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut nav = Navigator::default();
        assert!(!nav.back());
        assert_eq!(nav.current(), Route::MovieList);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::MovieList.to_string(), "movieList");
        assert_eq!(Route::MovieDetail(42).to_string(), "movieDetail/42");
        assert_eq!("movieDetail/42".parse(), Ok(Route::MovieDetail(42)));
        assert_eq!("movieList".parse(), Ok(Route::MovieList));
    }

    #[test]
    fn test_malformed_paths_rejected() {
        for path in ["", "movieDetail", "movieDetail/", "movieDetail/abc", "movieList/1", "other/1"] {
            assert_eq!(path.parse::<Route>(), Err(()), "{}", path);
        }
    }
}
