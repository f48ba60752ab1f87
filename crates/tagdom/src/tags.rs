//! Tag Registry
//!
//! One constructor per tag name, all delegating to [`Html::build`].

use tagdom_dom::{DomResult, NodeId};

use crate::{Argument, Html};

macro_rules! define_tags {
    ($($name:ident)*) => {
        /// Every tag name with a constructor on [`Html`]
        pub const TAGS: &[&str] = &[$(stringify!($name)),*];

        impl Html {
            $(
                #[doc = concat!("Build a `<", stringify!($name), ">` element.")]
                #[inline]
                pub fn $name(&self, args: impl Into<Argument>) -> DomResult<NodeId> {
                    self.build(stringify!($name), args)
                }
            )*
        }
    };
}

define_tags! {
    a abbr acronym address applet area article aside audio b base basefont bdo
    big blockquote body br button canvas caption center cite code col colgroup
    command datalist dd del details dfn dir div dl dt em embed fieldset
    figcaption figure font footer form frame frameset h1 h2 h3 h4 h5 h6 head
    header hgroup hr html i iframe img input ins isindex kbd keygen label
    legend li link map mark menu meta meter nav noframes noscript object ol
    optgroup option output p param pre progress q rp rt ruby s samp script
    section select small source span strike strong style sub summary sup table
    tbody td textarea tfoot th thead time title tr tt u ul var video wbr xmp
}

/// True when `name` has its own constructor
pub fn is_registered(name: &str) -> bool {
    TAGS.contains(&name)
}
