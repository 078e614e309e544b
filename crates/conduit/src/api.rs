//! Typed facade over the dynamic method handles.
//!
//! Each namespace struct is a thin wrapper around a [`Method`] and stays
//! as cheap to clone. The facade never constrains the dynamic reach:
//! anything it does not know is still a [`Conduit::method_path`] away.

use crate::{
    client::{Conduit, Method, Params},
    error::ConduitError,
    model::{Revision, RevisionSearchParams, UserInfo},
    paging::{self, Page, Paginated},
    transport::HttpClient,
};

macro_rules! api_method {
    ($(#[$meta:meta])* $method:ident => $Result:ty) => {
        $(#[$meta])*
        pub async fn $method(&self) -> Result<$Result, ConduitError<C::Error>> {
            self.method
                .extend(stringify!($method))
                .call_with(&Params::new())
                .await
        }
    };
    ($(#[$meta:meta])* $method:ident($Params:ty) => $Result:ty) => {
        $(#[$meta])*
        pub async fn $method(&self, params: $Params) -> Result<$Result, ConduitError<C::Error>> {
            self.method
                .extend(stringify!($method))
                .call_with(&params)
                .await
        }
    };
}

impl<C: HttpClient> Conduit<C> {
    /// Typed handles under `user.*`.
    pub fn user(&self) -> UserApi<C> {
        UserApi {
            method: self.method("user"),
        }
    }

    /// Typed handles under `differential.*`.
    pub fn differential(&self) -> DifferentialApi<C> {
        DifferentialApi {
            method: self.method("differential"),
        }
    }
}

/// Typed facade over `user.*`.
#[derive(Clone, Debug)]
pub struct UserApi<C: HttpClient> {
    method: Method<C>,
}

impl<C: HttpClient> UserApi<C> {
    api_method!(
        /// `user.whoami`: the user this client's token belongs to.
        whoami => UserInfo
    );
}

/// Typed facade over `differential.*`.
#[derive(Clone, Debug)]
pub struct DifferentialApi<C: HttpClient> {
    method: Method<C>,
}

impl<C: HttpClient> DifferentialApi<C> {
    /// Typed handles under `differential.revision.*`.
    pub fn revision(&self) -> RevisionApi<C> {
        RevisionApi {
            method: self.method.extend("revision"),
        }
    }
}

/// Typed facade over `differential.revision.*`.
#[derive(Clone, Debug)]
pub struct RevisionApi<C: HttpClient> {
    method: Method<C>,
}

impl<C: HttpClient> RevisionApi<C> {
    api_method!(
        /// `differential.revision.search`: one page of matching revisions.
        search(Paginated<RevisionSearchParams>) => Page<Revision>
    );

    /// Drain every page of `differential.revision.search`.
    ///
    /// `params.after` seeds the starting cursor when resuming a previous
    /// drain; it is replaced page by page as the stream advances.
    pub async fn search_all(
        &self,
        params: Paginated<RevisionSearchParams>,
    ) -> Result<Vec<Revision>, ConduitError<C::Error>> {
        paging::request_all(|request| self.search(request), params).await
    }
}
