/*
 * Copyright (c) Radzivon Bartoshyk, 3/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

//! Helpers for negotiating frame dimensions with a hosting pipeline.
//!
//! The upscaler maps any accepted source extent to exactly double on the
//! output side; these helpers keep a caller's advertised extents and stepped
//! ranges consistent with that mapping in both directions.

/// A bounded, stepped range of acceptable extents (width or height).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ExtentRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl ExtentRange {
    /// The range an output pad should advertise for this input range.
    pub fn doubled(&self) -> ExtentRange {
        ExtentRange {
            min: self.min << 1,
            max: self.max << 1,
            step: self.step << 1,
        }
    }

    /// The range an input pad should advertise for this output range.
    ///
    /// A step never collapses to zero when halved.
    pub fn halved(&self) -> ExtentRange {
        ExtentRange {
            min: self.min >> 1,
            max: self.max >> 1,
            step: (self.step >> 1).max(1),
        }
    }
}

/// Output extent for an accepted input extent.
#[inline]
pub fn doubled_extent(extent: u32) -> u32 {
    extent << 1
}

/// Input extent matching an output extent.
#[inline]
pub fn halved_extent(extent: u32) -> u32 {
    extent >> 1
}
