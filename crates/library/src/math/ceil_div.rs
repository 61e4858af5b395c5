use num_traits::{One, Zero};
use primitive_types::U256;

// Copyright 2021 Drift Labs
// Copyright 2025 INSTADAPP LABS INC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Portions of this code are derived from Drift Protocol
// Original source: https://github.com/drift-labs/protocol-v2/blob/master/programs/drift/src/math/ceil_div.rs
// Modified by INSTADAPP LABS INC

pub trait CheckedCeilDiv: Sized {
    /// Division rounding up. `None` on a zero divisor or overflow.
    fn checked_ceil_div(&self, rhs: Self) -> Option<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl CheckedCeilDiv for $t {
            #[track_caller]
            #[inline]
            fn checked_ceil_div(&self, rhs: $t) -> Option<$t> {
                let quotient = self.checked_div(rhs)?;
                let remainder = self.checked_rem(rhs)?;

                if remainder != <$t>::zero() {
                    quotient.checked_add(<$t>::one())
                } else {
                    Some(quotient)
                }
            }
        }
    };
}

checked_impl!(u128);
checked_impl!(u64);
checked_impl!(u32);
checked_impl!(u8);

impl CheckedCeilDiv for U256 {
    #[inline]
    fn checked_ceil_div(&self, rhs: U256) -> Option<U256> {
        let quotient = self.checked_div(rhs)?;
        let remainder = self.checked_rem(rhs)?;

        if remainder.is_zero() {
            Some(quotient)
        } else {
            quotient.checked_add(U256::one())
        }
    }
}
