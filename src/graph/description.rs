//! Raw city/route description supplied by the caller.

/// Opaque city identifier. Unique within a [`GraphDescription`].
pub type City = String;

/// Availability of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RouteStatus {
    /// Traversable.
    Ok,
    /// Excluded from the graph entirely.
    Closed,
}

/// A route between two cities.
///
/// Routes are written with a direction but become undirected edges.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub from: City,
    pub to: City,
    /// Edge weight, must be finite and positive.
    pub distance: f64,
    pub status: RouteStatus,
}

impl Route {
    /// Creates a route with the given status.
    pub fn new(
        from: impl Into<City>,
        to: impl Into<City>,
        distance: f64,
        status: RouteStatus,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
            status,
        }
    }

    /// Creates an open route.
    pub fn ok(from: impl Into<City>, to: impl Into<City>, distance: f64) -> Self {
        Self::new(from, to, distance, RouteStatus::Ok)
    }

    /// Creates a closed route.
    pub fn closed(from: impl Into<City>, to: impl Into<City>, distance: f64) -> Self {
        Self::new(from, to, distance, RouteStatus::Closed)
    }

    pub fn is_open(&self) -> bool {
        self.status == RouteStatus::Ok
    }
}

/// Input to graph construction: the listed cities and all known routes.
///
/// # Examples
///
/// ```
/// use u_roadpath::graph::{GraphDescription, Route};
///
/// let description = GraphDescription::default()
///     .with_cities(["A", "B", "C"])
///     .with_route(Route::ok("A", "B", 4.0))
///     .with_route(Route::closed("B", "C", 2.0));
/// assert_eq!(description.cities.len(), 3);
/// assert_eq!(description.routes.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphDescription {
    /// Cities in input order. Order fixes node indices.
    pub cities: Vec<City>,
    pub routes: Vec<Route>,
}

impl GraphDescription {
    pub fn new(cities: Vec<City>, routes: Vec<Route>) -> Self {
        Self { cities, routes }
    }

    pub fn with_city(mut self, city: impl Into<City>) -> Self {
        self.cities.push(city.into());
        self
    }

    pub fn with_cities<I, C>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<City>,
    {
        self.cities.extend(cities.into_iter().map(Into::into));
        self
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }
}
