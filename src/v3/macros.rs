/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Fetches a single record from "<base uri><id>"
macro_rules! obj_from_id {
    ( $c:expr, $uri:expr, $id:expr, $rt: ty) => {{
        let endpoint = format!("{}{}", $uri, urlencoding::encode($id));
        $c.get::<$rt>(&endpoint).await
    }};
}

pub(crate) use obj_from_id;
